use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{debug, instrument};

use crate::{
    error::{OptimizerError, OptimizerResult},
    solver::{
        solver_matrix::SolverMatrix,
        tour_solver::{SolverOutput, TourSolver},
    },
    tsplib::{problem::TsplibProblem, solution::ConcordeSolution},
};

const OPTIMAL_VALUE_PREFIX: &str = "Optimal Solution:";

#[derive(Debug, Clone)]
pub struct ConcordeParams {
    pub executable: PathBuf,
    /// Concorde drops its intermediate files in the current directory, so
    /// each concurrent run needs its own work directory.
    pub work_dir: PathBuf,
    pub problem_name: String,
}

impl Default for ConcordeParams {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("concorde"),
            work_dir: std::env::temp_dir().join("courier"),
            problem_name: String::from("tsp_data"),
        }
    }
}

/// Runs the Concorde TSP solver as a subprocess on a TSPLIB problem file.
pub struct ConcordeSolver {
    params: ConcordeParams,
}

impl ConcordeSolver {
    pub fn new(params: ConcordeParams) -> Self {
        Self { params }
    }

    fn problem_file_name(&self) -> String {
        format!("{}.tsp", self.params.problem_name)
    }

    fn solution_file_name(&self) -> String {
        format!("{}.sol", self.params.problem_name)
    }

    fn run(&self, work_dir: &Path) -> OptimizerResult<String> {
        let output = Command::new(&self.params.executable)
            .current_dir(work_dir)
            .arg("-x")
            .arg("-o")
            .arg(self.solution_file_name())
            .arg(self.problem_file_name())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if output.status.success() {
            Ok(stdout)
        } else {
            Err(OptimizerError::ProcessFailed {
                context: format!(
                    "{} exited with {}",
                    self.params.executable.display(),
                    output.status
                ),
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}

impl TourSolver for ConcordeSolver {
    fn name(&self) -> &str {
        "concorde"
    }

    #[instrument(skip_all, level = "debug")]
    fn solve(&self, matrix: &SolverMatrix) -> OptimizerResult<SolverOutput> {
        let work_dir = &self.params.work_dir;
        fs::create_dir_all(work_dir)?;

        let problem_file = work_dir.join(self.problem_file_name());
        let solution_file = work_dir.join(self.solution_file_name());

        if solution_file.exists() {
            fs::remove_file(&solution_file)?;
        }

        TsplibProblem::from_matrix("temp", matrix).write_to_file(&problem_file)?;
        debug!("Wrote {}", problem_file.display());

        let stdout = self.run(work_dir)?;
        let solution = ConcordeSolution::from_file(&solution_file)?;

        if solution.dimension != matrix.dimension() {
            return Err(OptimizerError::malformed_solver_output(format!(
                "solved {} nodes, expected {}",
                solution.dimension,
                matrix.dimension()
            )));
        }

        let optimal_value = match parse_optimal_value(&stdout) {
            Some(value) => value,
            None => {
                debug!("No optimal value in concorde output, recomputing from the tour");
                matrix.tour_cost(&solution.tour) as f64
            }
        };

        Ok(SolverOutput {
            found_tour: !solution.tour.is_empty(),
            optimal_value,
            tour: solution.tour,
        })
    }
}

pub fn parse_optimal_value(stdout: &str) -> Option<f64> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix(OPTIMAL_VALUE_PREFIX))
        .and_then(|value| value.trim().parse().ok())
}
