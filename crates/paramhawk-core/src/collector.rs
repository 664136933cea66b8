//! URL collector: archive tool output → `<domain>_urls.txt`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::archive::ArchiveTool;
use crate::artifact;
use crate::error::HawkError;

/// Outcome of collecting one domain.
#[derive(Debug, Clone)]
pub struct CollectSummary {
    pub path: PathBuf,
    pub lines_written: usize,
    pub elapsed: Duration,
}

/// Writes every non-blank line of `raw` to `out`, verbatim and in order.
/// A trailing `\r` is treated as part of the terminator. Returns the number of lines written.
pub fn write_nonblank_lines<W: Write>(raw: &[u8], mut out: W) -> io::Result<usize> {
    let mut written = 0;
    for line in raw.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        out.write_all(line)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Runs `tool` for `domain` and stores its output in `<out_dir>/<sanitized>_urls.txt`,
/// truncating any previous artifact.
pub fn collect(
    tool: &dyn ArchiveTool,
    domain: &str,
    out_dir: &Path,
) -> Result<CollectSummary, HawkError> {
    let start = Instant::now();
    let raw = tool.fetch(domain)?;

    let path = artifact::urls_path(out_dir, domain);
    let file = File::create(&path).map_err(|e| HawkError::artifact("create", &path, e))?;
    let lines_written = write_nonblank_lines(&raw, BufWriter::new(file))
        .map_err(|e| HawkError::artifact("write", &path, e))?;

    let elapsed = start.elapsed();
    tracing::info!(
        domain,
        tool = tool.name(),
        path = %path.display(),
        lines = lines_written,
        elapsed_ms = elapsed.as_millis() as u64,
        "collected urls"
    );
    Ok(CollectSummary {
        path,
        lines_written,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct FakeTool(&'static [u8]);

    impl ArchiveTool for FakeTool {
        fn name(&self) -> &str {
            "fake"
        }

        fn fetch(&self, _domain: &str) -> Result<Vec<u8>, HawkError> {
            Ok(self.0.to_vec())
        }
    }

    struct FailingTool;

    impl ArchiveTool for FailingTool {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, domain: &str) -> Result<Vec<u8>, HawkError> {
            Err(HawkError::Subprocess {
                tool: "failing".into(),
                domain: domain.into(),
                reason: "exited with status 1".into(),
            })
        }
    }

    #[test]
    fn blank_lines_dropped() {
        let mut out = Vec::new();
        let n = write_nonblank_lines(b"\nhttp://a.com/1\n\n\r\nhttp://a.com/2\r\n\n", &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, b"http://a.com/1\nhttp://a.com/2\n");
    }

    #[test]
    fn last_line_without_newline_kept() {
        let mut out = Vec::new();
        let n = write_nonblank_lines(b"http://a.com/1\nhttp://a.com/2", &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, b"http://a.com/1\nhttp://a.com/2\n");
    }

    #[test]
    fn whitespace_only_line_kept_verbatim() {
        let mut out = Vec::new();
        write_nonblank_lines(b"  \nx\n", &mut out).unwrap();
        assert_eq!(out, b"  \nx\n");
    }

    #[test]
    fn collect_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FakeTool(b"https://a.com/?q=1\n\nhttps://a.com/about\n");
        let summary = collect(&tool, "a.com", dir.path()).unwrap();
        assert_eq!(summary.path, dir.path().join("a_com_urls.txt"));
        assert_eq!(summary.lines_written, 2);
        let body = fs::read_to_string(&summary.path).unwrap();
        assert_eq!(body, "https://a.com/?q=1\nhttps://a.com/about\n");
    }

    #[test]
    fn collect_truncates_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_com_urls.txt");
        fs::write(&path, "old\nold\nold\nold\n").unwrap();
        collect(&FakeTool(b"new\n"), "a.com", dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn collect_tool_failure_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect(&FailingTool, "a.com", dir.path()).unwrap_err();
        assert!(matches!(err, HawkError::Subprocess { .. }));
        assert!(!dir.path().join("a_com_urls.txt").exists());
    }

    #[test]
    fn collect_unwritable_dir_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = collect(&FakeTool(b"x\n"), "a.com", &missing).unwrap_err();
        assert!(matches!(err, HawkError::Artifact { action: "create", .. }));
    }
}
