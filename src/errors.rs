//! Centralized error handling for the monthly SIC relay
//!
//! Two kinds of failure matter to the caller: the notebook itself failed inside
//! papermill, or anything else went wrong around it. [`RelayError::is_execution_failure`]
//! tells them apart so the entry point can print the right message.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Papermill ran the notebook and a cell raised
    #[error("{message}")]
    Execution { message: String },

    /// The engine executable could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine exited unsuccessfully without reporting a notebook failure
    #[error("'{program}' exited with {status}: {stderr}")]
    EngineExit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// I/O operation errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parameter record could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Structured logging could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// Generic error for everything else
    #[error("{0}")]
    Generic(String),
}

impl RelayError {
    /// True when the notebook failed inside the execution engine.
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, RelayError::Execution { .. })
    }

    /// Headline printed before the error itself when the process gives up.
    pub fn headline(&self) -> &'static str {
        if self.is_execution_failure() {
            "Failed with Papermill Execution Error"
        } else {
            "Failed with general exception"
        }
    }
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
