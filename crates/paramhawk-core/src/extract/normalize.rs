//! Reducing a raw archive URL to its parameter-key form.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::NormalizeMode;

/// Matches a parameter value: the `=` and everything up to the next `&`.
static PARAM_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=[^&]*").expect("static regex"));

/// Normalizes `line` under `mode`. `None` means the line carries no query parameter and is dropped.
/// Every `Some` result contains both `?` and `=`.
///
/// - `FirstValue`: `https://x.com/a?id=5&ref=2` → `https://x.com/a?id=`
/// - `EveryValue`: `https://x.com/a?id=5&ref=2` → `https://x.com/a?id=&ref=`
pub fn normalize(line: &str, mode: NormalizeMode) -> Option<String> {
    if !line.contains('?') {
        return None;
    }
    let first_eq = line.find('=')?;
    match mode {
        NormalizeMode::FirstValue => {
            let cut = &line[..=first_eq];
            cut.contains('?').then(|| cut.to_string())
        }
        NormalizeMode::EveryValue => Some(PARAM_VALUE.replace_all(line, "=").into_owned()),
    }
}
