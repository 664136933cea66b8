//! Per-domain artifact naming.
//!
//! Both artifacts share the sanitized domain as prefix and live in the run's
//! output directory: `<prefix>_urls.txt` and `<prefix>_param_urls.txt`.

mod sanitize;

pub use sanitize::sanitize_domain;

use std::path::{Path, PathBuf};

/// Suffix of the raw URL artifact written by the collector.
pub const URLS_SUFFIX: &str = "urls.txt";
/// Suffix of the normalized parameter artifact written by the extractor.
pub const PARAM_URLS_SUFFIX: &str = "param_urls.txt";

/// `<sanitized-domain>_<suffix>` inside `dir`.
pub fn artifact_path(dir: &Path, domain: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}_{}", sanitize_domain(domain), suffix))
}

/// Path of the raw URL artifact for `domain`.
pub fn urls_path(dir: &Path, domain: &str) -> PathBuf {
    artifact_path(dir, domain, URLS_SUFFIX)
}

/// Path of the parameter artifact for `domain`.
pub fn param_urls_path(dir: &Path, domain: &str) -> PathBuf {
    artifact_path(dir, domain, PARAM_URLS_SUFFIX)
}
