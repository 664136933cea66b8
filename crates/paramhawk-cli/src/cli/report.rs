//! User-facing lines for finished steps.

use paramhawk_core::collector::CollectSummary;
use paramhawk_core::extract::ExtractSummary;
use paramhawk_core::pipeline::Step;

pub fn collected_line(domain: &str, s: &CollectSummary) -> String {
    format!(
        "[{domain}] collected {} in {:.2}s, saved to {}",
        plural(s.lines_written, "URL", "URLs"),
        s.elapsed.as_secs_f64(),
        s.path.display()
    )
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

pub fn extracted_line(domain: &str, s: &ExtractSummary) -> String {
    format!(
        "[{domain}] {} from {} ({}) in {:.2}s, saved to {}",
        plural(s.stats.lines_written, "param URL", "param URLs"),
        plural(s.stats.lines_read, "line", "lines"),
        plural(s.stats.duplicates, "duplicate", "duplicates"),
        s.elapsed.as_secs_f64(),
        s.path.display()
    )
}

pub fn print_step(step: Step<'_>) {
    let line = match step {
        Step::Collected { domain, summary } => collected_line(domain, summary),
        Step::Extracted { domain, summary } => extracted_line(domain, summary),
    };
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramhawk_core::extract::ExtractStats;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn collected_line_format() {
        let s = CollectSummary {
            path: PathBuf::from("a_com_urls.txt"),
            lines_written: 12,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            collected_line("a.com", &s),
            "[a.com] collected 12 URLs in 1.50s, saved to a_com_urls.txt"
        );
    }

    #[test]
    fn extracted_line_format() {
        let s = ExtractSummary {
            path: PathBuf::from("a_com_param_urls.txt"),
            stats: ExtractStats {
                lines_read: 4,
                lines_written: 2,
                duplicates: 1,
            },
            elapsed: Duration::from_millis(20),
        };
        assert_eq!(
            extracted_line("a.com", &s),
            "[a.com] 2 param URLs from 4 lines (1 duplicate) in 0.02s, saved to a_com_param_urls.txt"
        );
    }

    #[test]
    fn extracted_line_singular_and_zero() {
        let s = ExtractSummary {
            path: PathBuf::from("b_com_param_urls.txt"),
            stats: ExtractStats {
                lines_read: 1,
                lines_written: 1,
                duplicates: 0,
            },
            elapsed: Duration::from_millis(0),
        };
        assert_eq!(
            extracted_line("b.com", &s),
            "[b.com] 1 param URL from 1 line (0 duplicates) in 0.00s, saved to b_com_param_urls.txt"
        );
    }
}
