//! The parameter relay: command line in, one notebook execution out.

use crate::cli::Args;
use crate::engine::{output_notebook_path, NotebookEngine};
use crate::errors::Result;
use crate::params::ParameterRecord;
use chrono::{Local, NaiveDate};
use tracing::info;

/// What a successful relay did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The engine ran the notebook
    Executed(ParameterRecord),
    /// `--dry-run`: parameters resolved, engine not called
    DryRun(ParameterRecord),
}

impl RelayOutcome {
    pub fn params(&self) -> &ParameterRecord {
        match self {
            RelayOutcome::Executed(p) | RelayOutcome::DryRun(p) => p,
        }
    }
}

/// Resolves the parameters against `today` and hands them to `engine`.
pub fn run<E: NotebookEngine + ?Sized>(
    args: &Args,
    engine: &E,
    today: NaiveDate,
) -> Result<RelayOutcome> {
    let params = ParameterRecord::from_args(args, today);
    info!(
        area = %params.area,
        dt = %params.dt,
        outdir = %params.outdir,
        indirs = params.indirs.as_deref().unwrap_or("-"),
        "resolved notebook parameters"
    );

    if args.dry_run {
        return Ok(RelayOutcome::DryRun(params));
    }

    let output = output_notebook_path(&args.notebook);
    info!(
        notebook = %args.notebook.display(),
        output = %output.display(),
        "executing notebook"
    );
    engine.execute(&args.notebook, &output, &params)?;
    Ok(RelayOutcome::Executed(params))
}

/// [`run`] against the local calendar date.
pub fn run_today<E: NotebookEngine + ?Sized>(args: &Args, engine: &E) -> Result<RelayOutcome> {
    run(args, engine, Local::now().date_naive())
}
