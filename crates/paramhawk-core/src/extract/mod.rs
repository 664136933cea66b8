//! Parameter extractor: `<domain>_urls.txt` → `<domain>_param_urls.txt`.
//!
//! Each line is normalized (see [`normalize`]); lines without parameters are
//! dropped and the rest are deduplicated against a set local to one call, so
//! output keeps first-seen order and never repeats a line.

mod normalize;

pub use normalize::normalize;

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::artifact;
use crate::config::NormalizeMode;
use crate::error::HawkError;

/// Line counts for one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub duplicates: usize,
}

/// Outcome of extracting one domain.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub path: PathBuf,
    pub stats: ExtractStats,
    pub elapsed: Duration,
}

/// Failure inside [`extract_lines`], split by side so callers can name the right file.
#[derive(Debug)]
pub enum LineError {
    Read(io::Error),
    Write(io::Error),
}

/// Normalizes and deduplicates every line of `input` into `out`.
/// Bytes that are not valid UTF-8 are replaced before normalization.
pub fn extract_lines<R, W>(
    mut input: R,
    mut out: W,
    mode: NormalizeMode,
) -> Result<ExtractStats, LineError>
where
    R: BufRead,
    W: Write,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut stats = ExtractStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).map_err(LineError::Read)?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);

        let Some(normalized) = normalize(&line, mode) else {
            continue;
        };
        if seen.contains(&normalized) {
            stats.duplicates += 1;
            continue;
        }
        writeln!(out, "{normalized}").map_err(LineError::Write)?;
        seen.insert(normalized);
        stats.lines_written += 1;
    }

    out.flush().map_err(LineError::Write)?;
    Ok(stats)
}

/// Reads `<out_dir>/<sanitized>_urls.txt` and writes `<out_dir>/<sanitized>_param_urls.txt`.
/// The URL artifact must exist; if it does not, no parameter artifact is created.
pub fn extract(
    domain: &str,
    out_dir: &Path,
    mode: NormalizeMode,
) -> Result<ExtractSummary, HawkError> {
    let start = Instant::now();
    let input_path = artifact::urls_path(out_dir, domain);
    let input = File::open(&input_path).map_err(|e| HawkError::artifact("open", &input_path, e))?;

    let path = artifact::param_urls_path(out_dir, domain);
    let output = File::create(&path).map_err(|e| HawkError::artifact("create", &path, e))?;

    let stats = extract_lines(BufReader::new(input), BufWriter::new(output), mode).map_err(|e| match e {
        LineError::Read(e) => HawkError::artifact("read", &input_path, e),
        LineError::Write(e) => HawkError::artifact("write", &path, e),
    })?;

    let elapsed = start.elapsed();
    tracing::info!(
        domain,
        path = %path.display(),
        read = stats.lines_read,
        written = stats.lines_written,
        duplicates = stats.duplicates,
        elapsed_ms = elapsed.as_millis() as u64,
        "extracted param urls"
    );
    Ok(ExtractSummary {
        path,
        stats,
        elapsed,
    })
}
