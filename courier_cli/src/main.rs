use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{solve::SolveArgs, tsp::TspArgs};

mod report_table;
mod solve;
mod tsp;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Orders the stops of a dispatch request and prints the dispatch report
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Prints the TSPLIB problem handed to Concorde for a dispatch request
    Tsp {
        #[command(flatten)]
        args: TspArgs,
    },
    /// Prints the JSON schema of a dispatch request
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Solve { args }) => solve::run(args)?,
        Some(Commands::Tsp { args }) => tsp::run(args)?,
        Some(Commands::Schema) => {
            println!("{}", courier_optimizer::json::schema::generate_json_schema()?)
        }
        None => {}
    }

    Ok(())
}
