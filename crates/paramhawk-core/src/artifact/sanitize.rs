//! Filename-safe prefix derived from a domain.

/// Sanitizes a domain for use as an artifact filename prefix.
///
/// - Removes every literal `://`
/// - Replaces `/` and `.` with `_`
///
/// No other characters are touched: `https://a.com/x` → `httpsa_com_x`.
pub fn sanitize_domain(domain: &str) -> String {
    domain.replace("://", "").replace(['/', '.'], "_")
}
