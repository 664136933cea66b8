//! Domain source: one domain from the command line, or a list read from stdin.

use std::io::BufRead;

use crate::error::HawkError;

/// Where the target domains come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// A single domain given with `-d`.
    Single(String),
    /// Newline-delimited domains read from standard input (`-l`).
    Stdin,
}

impl DomainSource {
    /// Picks the source from the CLI inputs. Batch mode wins over `-d`.
    pub fn from_args(domain: Option<String>, list: bool) -> Result<Self, HawkError> {
        if list {
            if let Some(d) = domain {
                tracing::debug!(domain = %d, "ignoring -d because -l was given");
            }
            return Ok(DomainSource::Stdin);
        }
        match domain {
            Some(d) if !d.is_empty() => {
                check_domain(&d)?;
                Ok(DomainSource::Single(d))
            }
            _ => Err(HawkError::Usage(
                "please provide a target domain using -d, or pass -l to read domains from stdin"
                    .to_string(),
            )),
        }
    }

    /// Resolves the domain list. Only `Stdin` touches `input`.
    pub fn resolve<R: BufRead>(self, input: R) -> Result<Vec<String>, HawkError> {
        match self {
            DomainSource::Single(d) => Ok(vec![d]),
            DomainSource::Stdin => read_domains(input),
        }
    }
}

/// Rejects domains the archive tool would parse as an option.
fn check_domain(domain: &str) -> Result<(), HawkError> {
    if domain.starts_with('-') {
        return Err(HawkError::Usage(format!(
            "invalid domain {domain:?}: must not start with '-'"
        )));
    }
    Ok(())
}

/// Reads one domain per line, skipping empty lines. Only the line terminator is removed.
/// A domain starting with `-` fails the whole list.
pub fn read_domains<R: BufRead>(input: R) -> Result<Vec<String>, HawkError> {
    let mut domains = Vec::new();
    for line in input.lines() {
        let line = line.map_err(HawkError::Input)?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }
        check_domain(line)?;
        domains.push(line.to_string());
    }
    Ok(domains)
}
