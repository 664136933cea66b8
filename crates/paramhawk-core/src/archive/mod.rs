//! Archive tool interface and the external-process adapter.
//!
//! The collector only depends on [`ArchiveTool`]; the real `waybackurls`-style
//! binary is wrapped by [`ExternalTool`], located via [`discover_tool`] and
//! installed on demand by [`ensure_tool`].

mod discover;
mod install;

pub use discover::{discover_tool, go_bin_dirs};
pub use install::{ensure_tool, run_install};

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::HawkError;

/// Source of historical URLs for a domain.
pub trait ArchiveTool {
    /// Name used in messages and errors.
    fn name(&self) -> &str;

    /// Returns the tool's complete standard output for `domain`.
    fn fetch(&self, domain: &str) -> Result<Vec<u8>, HawkError>;
}

/// Archive tool run as a subprocess: `<program> <domain>`.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    name: String,
    program: PathBuf,
}

impl ExternalTool {
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
        }
    }

    /// Resolved path of the binary.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ArchiveTool for ExternalTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, domain: &str) -> Result<Vec<u8>, HawkError> {
        tracing::debug!(tool = %self.program.display(), domain, "spawning archive tool");
        let output = Command::new(&self.program)
            .arg(domain)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| HawkError::Subprocess {
                tool: self.name.clone(),
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(HawkError::exit_status(&self.name, domain, output.status));
        }
        Ok(output.stdout)
    }
}
