use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use courier_optimizer::{dispatch::build_tsplib_problem, json::types::JsonDispatchRequest};

#[derive(Args)]
pub struct TspArgs {
    /// The dispatch request to convert
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Value of the NAME header
    #[arg(long, default_value = "temp")]
    name: String,
}

pub fn run(args: TspArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let request: JsonDispatchRequest = serde_json::from_reader(BufReader::new(f))?;
    let problem = request.build_problem()?;

    print!("{}", build_tsplib_problem(&problem, &args.name)?);

    Ok(())
}
