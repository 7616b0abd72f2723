//! Parameter record handed to the notebook
//!
//! This module turns the parsed command line into the small set of named string
//! values papermill injects into the notebook's `parameters` cell. The only derived
//! value is the `PREV` date token, which becomes the month before the run date.

use crate::cli::{Area, Args};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Literal accepted in place of a date to mean "the month before today"
pub const PREV_TOKEN: &str = "PREV";

/// Date argument as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// `PREV` in any letter case
    Prev,
    /// A concrete `YYYYMM` or `YYYYMMDD` string, kept verbatim
    Literal(String),
}

impl DateToken {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(PREV_TOKEN) {
            DateToken::Prev
        } else {
            DateToken::Literal(raw.to_string())
        }
    }

    /// Resolves the token against the run date. Literals are never adjusted.
    pub fn resolve(&self, today: NaiveDate) -> String {
        match self {
            DateToken::Prev => previous_month(today),
            DateToken::Literal(dt) => dt.clone(),
        }
    }
}

/// Calendar month preceding `today`, formatted `YYYYMM`.
pub fn previous_month(today: NaiveDate) -> String {
    let (year, month) = match today.month() {
        1 => (today.year() - 1, 12),
        m => (today.year(), m - 1),
    };
    format!("{:04}{:02}", year, month)
}

/// Named parameters injected into the notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    pub area: Area,
    pub dt: String,
    pub outdir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirs: Option<String>,
}

impl ParameterRecord {
    pub fn new(
        area: Area,
        dt: &DateToken,
        outdir: &str,
        indirs: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        Self {
            area,
            dt: dt.resolve(today),
            outdir: outdir.to_string(),
            indirs: indirs.map(str::to_string),
        }
    }

    pub fn from_args(args: &Args, today: NaiveDate) -> Self {
        Self::new(
            args.area,
            &args.month,
            &args.outdir,
            args.indirs.as_deref(),
            today,
        )
    }

    /// Name/value pairs in notebook order; `indirs` only when given.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            ("area", self.area.as_str()),
            ("dt", self.dt.as_str()),
            ("outdir", self.outdir.as_str()),
        ];
        if let Some(indirs) = &self.indirs {
            entries.push(("indirs", indirs.as_str()));
        }
        entries
    }

    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
