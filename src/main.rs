//! Entry point for the monthly SIC relay.
//! Parses the command line, runs the notebook through papermill and maps failures to an exit code.

use clap::Parser;
use osisaf_monthly_sic::cli::Args;
use osisaf_monthly_sic::engine::Papermill;
use osisaf_monthly_sic::logging::init_logging;
use osisaf_monthly_sic::relay::{self, RelayOutcome};
use osisaf_monthly_sic::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command-line arguments; clap exits with status 2 on bad input
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.headline());
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    init_logging(args.verbose)?;

    let engine = Papermill::new(&args.papermill);
    match relay::run_today(args, &engine)? {
        RelayOutcome::DryRun(params) => println!("{}", params.to_json()?),
        RelayOutcome::Executed(params) => {
            println!("✅ Monthly SIC notebook completed for {} {}", params.area, params.dt)
        }
    }
    Ok(())
}
