//! osisaf_monthly_sic: run the monthly OSI SAF SIC notebook from the command line
//!
//! The monthly sea-ice concentration product for the OSI SAF SIC CDR v3
//! (OSI-450-a, OSI-430-a) is computed by the notebook
//! `Prepare Monthly OSISAF SIC.ipynb`. This crate is the thin layer in front of it:
//! it parses the hemisphere, month, output directory and input-directory manifest,
//! resolves `PREV` to the previous calendar month, and hands the parameters to
//! papermill.
//!
//! ## Module Organization
//!
//! - [`cli`]: command-line arguments
//! - [`params`]: the parameter record and date resolution
//! - [`engine`]: the notebook execution engine (papermill subprocess)
//! - [`relay`]: the single relay call tying the above together
//! - [`logging`]: tracing subscriber setup
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//! ```rust,no_run
//! use clap::Parser;
//! use osisaf_monthly_sic::prelude::*;
//!
//! let args = Args::parse_from(["prepare_monthly_osisaf_sic", "nh", "PREV", "-o", "/data/out"]);
//! let engine = Papermill::new(&args.papermill);
//! let outcome = osisaf_monthly_sic::relay::run_today(&args, &engine).unwrap();
//! println!("ran with dt={}", outcome.params().dt);
//! ```

pub mod cli;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod params;
pub mod relay;

pub use errors::*;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::cli::{Area, Args};
    pub use crate::engine::{NotebookEngine, Papermill};
    pub use crate::errors::{RelayError, Result};
    pub use crate::params::{DateToken, ParameterRecord};
    pub use crate::relay::RelayOutcome;
}
