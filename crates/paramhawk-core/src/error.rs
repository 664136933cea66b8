//! Error taxonomy for a ParamHawk run.
//!
//! Every variant is fatal: the CLI prints it and exits with status 1.

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum HawkError {
    /// Missing or contradictory command-line input.
    #[error("{0}")]
    Usage(String),

    /// The archive tool could not be fetched by the install command.
    #[error("installing {tool} failed: {reason}")]
    Install { tool: String, reason: String },

    /// The archive tool is neither on PATH nor in the Go binary directories.
    #[error("{tool} not found on PATH or in Go binary directories")]
    ToolNotFound { tool: String },

    /// The archive tool could not be spawned or exited unsuccessfully.
    #[error("running {tool} for {domain} failed: {reason}")]
    Subprocess {
        tool: String,
        domain: String,
        reason: String,
    },

    /// Create/open/read/write failure on an artifact file.
    #[error("{action} {}: {source}", .path.display())]
    Artifact {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the domain list from stdin failed.
    #[error("reading domain list: {0}")]
    Input(#[source] std::io::Error),
}

impl HawkError {
    pub(crate) fn artifact(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HawkError::Artifact {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn exit_status(tool: &str, domain: &str, status: ExitStatus) -> Self {
        let reason = match status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        HawkError::Subprocess {
            tool: tool.to_string(),
            domain: domain.to_string(),
            reason,
        }
    }
}
