//! Notebook execution engine
//!
//! The relay only knows the [`NotebookEngine`] trait. Production runs go through
//! [`Papermill`], which shells out to the `papermill` executable and waits for it;
//! tests swap in [`mock::RecordingEngine`].

use crate::errors::{RelayError, Result};
use crate::params::ParameterRecord;
use std::ffi::{OsStr, OsString};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Notebook executed when none is given on the command line
pub const DEFAULT_NOTEBOOK: &str = "Prepare Monthly OSISAF SIC.ipynb";

const NOTEBOOK_EXTENSION: &str = "ipynb";
const OUTPUT_SUFFIX: &str = "_out.ipynb";

/// Marker papermill prints when a notebook cell raised
const EXECUTION_ERROR_MARKER: &str = "PapermillExecutionError";

/// Runs a notebook with injected parameters.
pub trait NotebookEngine {
    /// Executes `notebook`, writing the executed copy to `output`.
    ///
    /// Returns [`RelayError::Execution`] when the notebook itself failed and any
    /// other variant when the engine could not do its job.
    fn execute(&self, notebook: &Path, output: &Path, params: &ParameterRecord) -> Result<()>;
}

/// Path of the executed notebook: `name.ipynb` becomes `name_out.ipynb`.
pub fn output_notebook_path(notebook: &Path) -> PathBuf {
    let stem = if notebook.extension() == Some(OsStr::new(NOTEBOOK_EXTENSION)) {
        notebook.file_stem()
    } else {
        notebook.file_name()
    };
    let mut name = stem.unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    notebook.with_file_name(name)
}

/// Papermill invoked as a subprocess
#[derive(Debug, Clone)]
pub struct Papermill {
    program: PathBuf,
}

impl Papermill {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments after the program name. Values go through `-r` so papermill keeps
    /// them as strings instead of guessing `202103` is an integer.
    pub fn arguments(notebook: &Path, output: &Path, params: &ParameterRecord) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![notebook.into(), output.into()];
        for (name, value) in params.entries() {
            args.push("-r".into());
            args.push(name.into());
            args.push(value.into());
        }
        args
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl NotebookEngine for Papermill {
    fn execute(&self, notebook: &Path, output: &Path, params: &ParameterRecord) -> Result<()> {
        let args = Self::arguments(notebook, output, params);
        debug!(program = %self.program.display(), ?args, "spawning papermill");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RelayError::Spawn {
                program: self.program_name(),
                source,
            })?;

        // Progress and tracebacks arrive on stderr; pass them on as they come.
        let mut stderr = String::new();
        if let Some(pipe) = child.stderr.take() {
            for line in BufReader::new(pipe).split(b'\n') {
                let line = String::from_utf8_lossy(&line?).into_owned();
                info!(target: "papermill", "{}", line.trim_end_matches('\r'));
                stderr.push_str(&line);
                stderr.push('\n');
            }
        }
        let status = child.wait()?;

        if status.success() {
            info!(output = %output.display(), "notebook executed");
            return Ok(());
        }

        match execution_report(&stderr) {
            Some(report) => Err(RelayError::Execution {
                message: report.to_string(),
            }),
            None => Err(RelayError::EngineExit {
                program: self.program_name(),
                status,
                stderr: stderr.trim_end().to_string(),
            }),
        }
    }
}

/// Papermill's failure report: everything from the line naming the error onwards.
fn execution_report(stderr: &str) -> Option<&str> {
    let marker = stderr.find(EXECUTION_ERROR_MARKER)?;
    let line_start = stderr[..marker].rfind('\n').map_or(0, |i| i + 1);
    Some(stderr[line_start..].trim_end())
}

pub mod mock {
    //! Engine stand-in that records calls instead of running anything.

    use super::NotebookEngine;
    use crate::errors::{RelayError, Result};
    use crate::params::ParameterRecord;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// What the mock does when called
    #[derive(Debug, Clone)]
    pub enum MockOutcome {
        Succeed,
        ExecutionFailure(String),
        GeneralFailure(String),
    }

    /// One recorded `execute` call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub notebook: PathBuf,
        pub output: PathBuf,
        pub params: ParameterRecord,
    }

    #[derive(Debug)]
    pub struct RecordingEngine {
        outcome: MockOutcome,
        calls: RefCell<Vec<RecordedCall>>,
    }

    impl RecordingEngine {
        pub fn new(outcome: MockOutcome) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn succeeding() -> Self {
            Self::new(MockOutcome::Succeed)
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.borrow().clone()
        }
    }

    impl NotebookEngine for RecordingEngine {
        fn execute(&self, notebook: &Path, output: &Path, params: &ParameterRecord) -> Result<()> {
            self.calls.borrow_mut().push(RecordedCall {
                notebook: notebook.to_path_buf(),
                output: output.to_path_buf(),
                params: params.clone(),
            });
            match &self.outcome {
                MockOutcome::Succeed => Ok(()),
                MockOutcome::ExecutionFailure(message) => Err(RelayError::Execution {
                    message: message.clone(),
                }),
                MockOutcome::GeneralFailure(message) => Err(RelayError::Generic(message.clone())),
            }
        }
    }
}
