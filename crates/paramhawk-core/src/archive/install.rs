//! One-time installation of a missing archive tool.

use std::process::Command;

use super::{discover_tool, ExternalTool};
use crate::error::HawkError;

/// Runs `command` with inherited stdio. Non-zero exit or spawn failure is an install error.
pub fn run_install(tool: &str, command: &[String]) -> Result<(), HawkError> {
    let (program, args) = command.split_first().ok_or_else(|| HawkError::Install {
        tool: tool.to_string(),
        reason: "no install command configured".to_string(),
    })?;
    tracing::info!(tool, command = %command.join(" "), "installing archive tool");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| HawkError::Install {
            tool: tool.to_string(),
            reason: format!("{program}: {e}"),
        })?;
    if !status.success() {
        return Err(HawkError::Install {
            tool: tool.to_string(),
            reason: format!("`{}` exited with {}", command.join(" "), status),
        });
    }
    Ok(())
}

/// Locates `tool`, running `install_command` once if it is missing.
pub fn ensure_tool(tool: &str, install_command: &[String]) -> Result<ExternalTool, HawkError> {
    if let Some(path) = discover_tool(tool) {
        tracing::debug!(tool, path = %path.display(), "archive tool found");
        return Ok(ExternalTool::new(tool, path));
    }
    if install_command.is_empty() {
        return Err(HawkError::ToolNotFound {
            tool: tool.to_string(),
        });
    }
    run_install(tool, install_command)?;
    let path = discover_tool(tool).ok_or_else(|| HawkError::ToolNotFound {
        tool: tool.to_string(),
    })?;
    tracing::info!(tool, path = %path.display(), "archive tool installed");
    Ok(ExternalTool::new(tool, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_install_command_is_install_error() {
        assert!(matches!(
            run_install("waybackurls", &[]),
            Err(HawkError::Install { .. })
        ));
    }

    #[test]
    fn missing_tool_without_installer_is_not_found() {
        let err = ensure_tool("paramhawk-no-such-tool", &[]).unwrap_err();
        assert!(matches!(err, HawkError::ToolNotFound { .. }));
    }

    #[test]
    fn unspawnable_installer_is_install_error() {
        let err = ensure_tool(
            "paramhawk-no-such-tool",
            &cmd(&["/nonexistent/paramhawk-installer"]),
        )
        .unwrap_err();
        assert!(matches!(err, HawkError::Install { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failing_installer_is_install_error() {
        let err = ensure_tool("paramhawk-no-such-tool", &cmd(&["false"])).unwrap_err();
        match err {
            HawkError::Install { tool, .. } => assert_eq!(tool, "paramhawk-no-such-tool"),
            other => panic!("expected Install, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_installer_without_binary_is_not_found() {
        let err = ensure_tool("paramhawk-no-such-tool", &cmd(&["true"])).unwrap_err();
        assert!(matches!(err, HawkError::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn present_tool_skips_install() {
        let tool = ensure_tool("echo", &cmd(&["false"])).unwrap();
        assert!(tool.program().ends_with("echo"));
    }
}
