//! CLI for the wordrank frequency reporter.

mod report;

use anyhow::Result;
use clap::Parser;
use url::Url;
use wordrank_core::config;

/// Top-level CLI for the wordrank frequency reporter.
#[derive(Debug, Parser)]
#[command(name = "wordrank")]
#[command(
    about = "wordrank: report the most frequent words of a web-hosted text document",
    long_about = None
)]
pub struct Cli {
    /// Source document URL. Falls back to the configured URL.
    #[arg(long, value_name = "URL")]
    pub url: Option<Url>,

    /// First rank to report, 1-indexed. Falls back to the configured value.
    #[arg(long, value_name = "N")]
    pub start_rank: Option<usize>,

    /// Last rank to report, inclusive. Falls back to the configured value.
    #[arg(long, value_name = "N")]
    pub end_rank: Option<usize>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let url = cli
        .url
        .map(|u| u.to_string())
        .unwrap_or_else(|| cfg.url.clone());
    let start_rank = cli.start_rank.unwrap_or(cfg.start_rank);
    let end_rank = cli.end_rank.unwrap_or(cfg.end_rank);

    report::run_report(&url, start_rank, end_rank);
    Ok(())
}
