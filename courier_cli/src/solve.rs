use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Args, ValueEnum, builder::RangedU64ValueParser};
use courier_optimizer::{
    dispatch::solve_dispatch,
    json::types::JsonDispatchRequest,
    solver::{
        builtin::{BuiltinSolver, BuiltinSolverParams, MAX_EXACT_DIMENSION},
        concorde::{ConcordeParams, ConcordeSolver},
        tour_solver::TourSolver,
    },
};
use tracing::info;

use crate::report_table;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SolverKind {
    Builtin,
    Concorde,
}

#[derive(Args)]
pub struct SolveArgs {
    /// The dispatch request to solve
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = SolverKind::Builtin)]
    solver: SolverKind,

    /// Path of the Concorde executable
    #[arg(long, env = "COURIER_CONCORDE_BIN", default_value = "concorde")]
    concorde: PathBuf,

    /// Directory Concorde writes its files to
    #[arg(long, env = "COURIER_WORK_DIR")]
    work_dir: Option<PathBuf>,

    /// Largest number of nodes the built-in solver solves exactly
    #[arg(
        long,
        default_value_t = 12,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_EXACT_DIMENSION as u64)
    )]
    exact_limit: usize,

    /// Also print the stops as a table on stderr
    #[arg(long)]
    table: bool,

    #[arg(long)]
    pretty: bool,
}

impl SolveArgs {
    fn tour_solver(&self) -> Box<dyn TourSolver> {
        match self.solver {
            SolverKind::Builtin => Box::new(BuiltinSolver::new(BuiltinSolverParams {
                exact_limit: self.exact_limit,
            })),
            SolverKind::Concorde => {
                let defaults = ConcordeParams::default();
                Box::new(ConcordeSolver::new(ConcordeParams {
                    executable: self.concorde.clone(),
                    work_dir: self.work_dir.clone().unwrap_or(defaults.work_dir),
                    ..defaults
                }))
            }
        }
    }
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let request: JsonDispatchRequest = serde_json::from_reader(BufReader::new(f))?;
    let problem = request.build_problem()?;

    let solver = args.tour_solver();
    let outcome = solve_dispatch(&problem, solver.as_ref())?;
    let report = outcome.to_report(&problem)?;

    info!(
        "Finished: stops = {}, total distance = {}",
        report.result.dispatch.len(),
        outcome.route.total_distance()
    );

    if args.table {
        eprintln!("{}", report_table::render(&report));
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
