//! Defines command-line interface options using `clap` for the monthly SIC relay.

use crate::engine::DEFAULT_NOTEBOOK;
use crate::params::DateToken;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;

/// Prepare monthly product files for the OSI SAF SIC CDR v3 (OSI-450-a, OSI-430-a)
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    name = "prepare_monthly_osisaf_sic",
    about = "Prepare monthly product files for the OSI SAF SIC CDR v3 (OSI-450-a,OSI-430-a)"
)]
pub struct Args {
    /// Hemisphere for which to compute the monthly SIC product
    #[arg(value_name = "AREA", value_enum)]
    pub area: Area,

    /// Datestring (YYYYMM or YYYYMMDD) for any day in the month, or PREV for the previous month
    #[arg(value_name = "DATETIME", value_parser = parse_date_token)]
    pub month: DateToken,

    // Both are handed to the notebook as text, so they must be valid UTF-8.
    /// Directory where the monthly product is written
    #[arg(short, long, default_value = ".")]
    pub outdir: String,

    /// JSON file listing the input directories
    #[arg(short, long)]
    pub indirs: Option<String>,

    /// Notebook to execute
    #[arg(long, default_value = DEFAULT_NOTEBOOK)]
    pub notebook: PathBuf,

    /// Papermill executable used to run the notebook
    #[arg(long, env = "OSISAF_PAPERMILL", default_value = "papermill")]
    pub papermill: PathBuf,

    /// Print the resolved parameters as JSON and exit without running the notebook
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Hemisphere selector
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    /// Northern hemisphere
    Nh,
    /// Southern hemisphere
    Sh,
}

impl Area {
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Nh => "nh",
            Area::Sh => "sh",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_date_token(s: &str) -> Result<DateToken, Infallible> {
    Ok(DateToken::parse(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_positionals_and_defaults() {
        let args = Args::try_parse_from(["prog", "nh", "202103"]).unwrap();
        assert_eq!(args.area, Area::Nh);
        assert_eq!(args.month, DateToken::Literal("202103".to_string()));
        assert_eq!(args.outdir, ".");
        assert!(args.indirs.is_none());
        assert_eq!(args.notebook, PathBuf::from(DEFAULT_NOTEBOOK));
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_short_options() {
        let args =
            Args::try_parse_from(["prog", "sh", "prev", "-o", "/tmp/out", "-i", "in.json"]).unwrap();
        assert_eq!(args.area, Area::Sh);
        assert_eq!(args.month, DateToken::Prev);
        assert_eq!(args.outdir, "/tmp/out");
        assert_eq!(args.indirs.as_deref(), Some("in.json"));
    }

    #[test]
    fn rejects_unknown_hemisphere() {
        for bad in ["eq", "NH", "north"] {
            let err = Args::try_parse_from(["prog", bad, "202103"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue, "accepted {bad:?}");
        }
    }

    #[test]
    fn requires_both_positionals() {
        let err = Args::try_parse_from(["prog", "nh"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn concrete_dates_are_kept_verbatim() {
        let args = Args::try_parse_from(["prog", "nh", "20210315"]).unwrap();
        assert_eq!(args.month, DateToken::Literal("20210315".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_paths() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        for flag in ["-o", "-i"] {
            let bad = OsString::from_vec(b"/tmp/out\xff".to_vec());
            let argv: Vec<OsString> = vec![
                "prog".into(),
                "nh".into(),
                "202103".into(),
                flag.into(),
                bad,
            ];
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidUtf8, "accepted bad {flag}");
        }
    }
}
