//! Per-run driver: resolve domains, then collect and/or extract each one in order.
//!
//! Domains are processed strictly one after another; the first error aborts the
//! remaining domains.

use std::io::BufRead;
use std::path::PathBuf;

use crate::archive::{self, ArchiveTool};
use crate::collector::{self, CollectSummary};
use crate::config::{HawkConfig, NormalizeMode};
use crate::domains::DomainSource;
use crate::error::HawkError;
use crate::extract::{self, ExtractSummary};

/// Everything one invocation needs, built once from CLI args and the config file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: DomainSource,
    pub collect: bool,
    pub params: bool,
    pub output_dir: PathBuf,
    pub normalize: NormalizeMode,
    pub archive_tool: String,
    pub install_command: Vec<String>,
}

impl RunConfig {
    /// Combines CLI choices with file config. `output_dir` from the CLI wins over the file.
    pub fn new(
        source: DomainSource,
        collect: bool,
        params: bool,
        output_dir: Option<PathBuf>,
        cfg: &HawkConfig,
    ) -> Self {
        Self {
            source,
            collect,
            params,
            output_dir: output_dir
                .or_else(|| cfg.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            normalize: cfg.normalize,
            archive_tool: cfg.archive_tool.clone(),
            install_command: cfg.install_command.clone(),
        }
    }

    /// True when at least one of collect/extract was requested.
    pub fn has_work(&self) -> bool {
        self.collect || self.params
    }
}

/// Completed step, reported as soon as it finishes.
#[derive(Debug)]
pub enum Step<'a> {
    Collected {
        domain: &'a str,
        summary: &'a CollectSummary,
    },
    Extracted {
        domain: &'a str,
        summary: &'a ExtractSummary,
    },
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub domains: usize,
    pub collected: usize,
    pub extracted: usize,
}

/// Runs the requested steps for each domain with an already-located tool.
/// `tool` is required when collection is enabled and ignored otherwise.
pub fn run_domains<F>(
    cfg: &RunConfig,
    domains: &[String],
    tool: Option<&dyn ArchiveTool>,
    mut on_step: F,
) -> Result<RunSummary, HawkError>
where
    F: FnMut(Step<'_>),
{
    let tool = if cfg.collect {
        Some(tool.ok_or_else(|| {
            HawkError::Usage("collection requested without an archive tool".to_string())
        })?)
    } else {
        None
    };

    let mut summary = RunSummary::default();
    for domain in domains {
        tracing::debug!(domain = %domain, "processing domain");
        if let Some(tool) = tool {
            let collected = collector::collect(tool, domain, &cfg.output_dir)?;
            on_step(Step::Collected {
                domain,
                summary: &collected,
            });
            summary.collected += 1;
        }
        if cfg.params {
            let extracted = extract::extract(domain, &cfg.output_dir, cfg.normalize)?;
            on_step(Step::Extracted {
                domain,
                summary: &extracted,
            });
            summary.extracted += 1;
        }
        summary.domains += 1;
    }
    Ok(summary)
}

/// Resolves domains from `cfg.source` (reading `input` in batch mode), makes sure the
/// archive tool is available when collecting, then processes every domain.
pub fn run<R, F>(cfg: &RunConfig, input: R, on_step: F) -> Result<RunSummary, HawkError>
where
    R: BufRead,
    F: FnMut(Step<'_>),
{
    let domains = cfg.source.clone().resolve(input)?;
    tracing::info!(count = domains.len(), "resolved domains");
    if domains.is_empty() {
        return Ok(RunSummary::default());
    }

    let tool = if cfg.collect {
        Some(archive::ensure_tool(&cfg.archive_tool, &cfg.install_command)?)
    } else {
        None
    };
    run_domains(
        cfg,
        &domains,
        tool.as_ref().map(|t| t as &dyn ArchiveTool),
        on_step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_config_output_dir_precedence() {
        let mut file_cfg = HawkConfig::default();
        let src = DomainSource::Single("a.com".into());

        let cfg = RunConfig::new(src.clone(), true, false, None, &file_cfg);
        assert_eq!(cfg.output_dir, PathBuf::from("."));

        file_cfg.output_dir = Some(PathBuf::from("/srv/hawk"));
        let cfg = RunConfig::new(src.clone(), true, false, None, &file_cfg);
        assert_eq!(cfg.output_dir, PathBuf::from("/srv/hawk"));

        let cfg = RunConfig::new(src, true, false, Some(PathBuf::from("out")), &file_cfg);
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn has_work() {
        let file_cfg = HawkConfig::default();
        let src = DomainSource::Single("a.com".into());
        assert!(!RunConfig::new(src.clone(), false, false, None, &file_cfg).has_work());
        assert!(RunConfig::new(src.clone(), true, false, None, &file_cfg).has_work());
        assert!(RunConfig::new(src, false, true, None, &file_cfg).has_work());
    }

    #[test]
    fn collect_without_tool_is_usage_error() {
        let cfg = RunConfig::new(
            DomainSource::Single("a.com".into()),
            true,
            false,
            None,
            &HawkConfig::default(),
        );
        let err = run_domains(&cfg, &["a.com".to_string()], None, |_| {}).unwrap_err();
        assert!(matches!(err, HawkError::Usage(_)));
    }
}
