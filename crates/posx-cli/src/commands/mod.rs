//! Command handler modules for posx-cli.
//!
//! Shared argument parsing and config loading live here; the section
//! dispatch lives in [`report`].

pub mod report;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use posx_config::{report_unused_keys, AnalysisConfig, UnusedKeyPolicy};
use posx_portfolio::Direction;
use posx_report::Lang;
use std::path::PathBuf;
use tracing::warn;

/// Which part of the report a subcommand prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    All,
    Analysis,
    Table,
    Targets,
    Adjustment,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::All => "report",
            Section::Analysis => "analysis",
            Section::Table => "table",
            Section::Targets => "targets",
            Section::Adjustment => "adjustment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Layered config paths in merge order. Without any, the built-in sample is used.
    #[arg(long = "config")]
    pub config_paths: Vec<PathBuf>,

    /// Override the configured direction (long | short)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Override the configured report language (en | zh)
    #[arg(long)]
    pub lang: Option<Lang>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Fail instead of warning when the config carries keys nothing reads
    #[arg(long, default_value_t = false)]
    pub strict_config: bool,
}

/// Config ready for a run, plus the hash identifying it.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub analysis: AnalysisConfig,
    /// `None` for the built-in sample.
    pub config_hash: Option<String>,
}

/// Load layered config (or the built-in sample) and apply CLI overrides.
pub fn resolve_config(args: &ReportArgs) -> Result<ResolvedConfig> {
    let (mut analysis, config_hash) = if args.config_paths.is_empty() {
        (AnalysisConfig::sample(), None)
    } else {
        let loaded = posx_config::load_layered_yaml(args.config_paths.as_slice())?;

        let policy = if args.strict_config {
            UnusedKeyPolicy::Fail
        } else {
            UnusedKeyPolicy::Warn
        };
        let unused = report_unused_keys(&loaded.config_json, policy)?;
        if !unused.is_clean() {
            warn!(
                unused = ?unused.unused_leaf_pointers,
                "config carries keys nothing reads; ignored"
            );
        }

        let analysis = loaded
            .analysis()
            .with_context(|| format!("config_hash={}", loaded.config_hash))?;
        (analysis, Some(loaded.config_hash))
    };

    if let Some(d) = args.direction {
        analysis.direction = d;
    }
    if let Some(l) = args.lang {
        analysis.report.language = l;
    }

    Ok(ResolvedConfig {
        analysis,
        config_hash,
    })
}
