//! CLI for ParamHawk.

mod banner;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use paramhawk_core::config;
use paramhawk_core::domains::DomainSource;
use paramhawk_core::pipeline::{self, RunConfig};
use std::io;
use std::path::PathBuf;

/// Collect archived URLs for a domain and reduce them to unique parameter keys.
#[derive(Debug, Parser)]
#[command(name = "paramhawk", version)]
#[command(about = "ParamHawk: archive URL collection and parameter discovery", long_about = None)]
pub struct Cli {
    /// Target domain.
    #[arg(short = 'd', long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Collect all URLs for the target with the archive tool and store them.
    #[arg(short = 'c', long)]
    pub collect: bool,

    /// Generate param URLs from the collected URLs.
    #[arg(short = 'p', long)]
    pub params: bool,

    /// Read target domains from stdin, one per line, instead of -d.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Directory for the artifacts (default: config output_dir, else the current directory).
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not print the banner.
    #[arg(short = 's', long)]
    pub silent: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if !self.silent {
            banner::print_banner();
        }

        let source = DomainSource::from_args(self.domain, self.list)?;
        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let run_cfg = RunConfig::new(source, self.collect, self.params, self.output_dir, &cfg);
        if !run_cfg.has_work() {
            println!("Nothing to do: pass -c to collect URLs and/or -p to generate param URLs.");
            return Ok(());
        }

        let summary = pipeline::run(&run_cfg, io::stdin().lock(), report::print_step)?;
        tracing::info!(
            domains = summary.domains,
            collected = summary.collected,
            extracted = summary.extracted,
            "run completed"
        );
        Ok(())
    }
}

/// Parses the process arguments. Parse errors exit with status 1; help and version exit 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

pub fn run_from_args() -> Result<()> {
    parse_args().run()
}

#[cfg(test)]
mod tests;
