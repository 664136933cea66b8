//! Locating the archive tool binary.

use std::env;
use std::path::PathBuf;

/// Directories `go install` writes binaries to: `$GOBIN`, each `$GOPATH/bin`, `$HOME/go/bin`.
pub fn go_bin_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(gobin) = env::var_os("GOBIN").filter(|v| !v.is_empty()) {
        dirs.push(PathBuf::from(gobin));
    }
    if let Some(gopath) = env::var_os("GOPATH") {
        dirs.extend(env::split_paths(&gopath).map(|p| p.join("bin")));
    }
    if let Some(home) = env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join("go").join("bin"));
    }
    dirs
}

/// Finds `binary` on `PATH`, then in the Go binary directories.
pub fn discover_tool(binary: &str) -> Option<PathBuf> {
    match which::which(binary) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!(binary, "not on PATH ({e}); trying Go bin dirs");
            which_in_dirs(binary, go_bin_dirs())
        }
    }
}

fn which_in_dirs(binary: &str, dirs: Vec<PathBuf>) -> Option<PathBuf> {
    if dirs.is_empty() {
        return None;
    }
    let paths = env::join_paths(dirs).ok()?;
    let cwd = env::current_dir().ok()?;
    which::which_in(binary, Some(paths), cwd).ok()
}
