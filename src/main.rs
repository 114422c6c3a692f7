//! Magpie-Harvest main entry point
//!
//! Command-line interface wiring seed discovery, the crawl-and-extract
//! pipeline, and the JSON corpus writer together.

use anyhow::Context;
use clap::Parser;
use magpie_harvest::config::{load_config, Config};
use magpie_harvest::crawler::build_http_client;
use magpie_harvest::discovery::{Discovery, SeedList};
use magpie_harvest::output::write_corpus;
use magpie_harvest::pipeline::run_pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Magpie-Harvest: a document-hoarding web scraper
///
/// Crawls seed URLs, extracts page text plus text from linked office
/// documents (PDF, DOCX, XLSX, PPTX, TXT), and writes a cleaned JSON corpus.
#[derive(Parser, Debug)]
#[command(name = "magpie-harvest")]
#[command(version = "0.1.0")]
#[command(about = "A document-hoarding web scraper", long_about = None)]
struct Cli {
    /// Seed URLs to process
    #[arg(value_name = "SEED_URL")]
    seeds: Vec<String>,

    /// File with one seed URL per line (# lines are comments)
    #[arg(long, value_name = "FILE")]
    seeds_file: Option<PathBuf>,

    /// Free-text query passed to the discovery provider
    #[arg(long, default_value = "site:gov climate change report")]
    query: String,

    /// Maximum number of seed URLs to process
    #[arg(long, default_value_t = 10)]
    results: usize,

    /// Output JSON file
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Path to optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };

    let seed_list = build_seed_list(&cli)?;
    if seed_list.is_empty() {
        tracing::warn!("No seed URLs provided; the corpus will be empty");
    }

    tracing::info!("Starting harvest for query: {}", cli.query);
    let seeds = seed_list.discover(&cli.query, cli.results).await?;
    tracing::info!("Processing {} seed URLs", seeds.len());

    let client = build_http_client(&config.fetch).context("building HTTP client")?;
    let records = run_pipeline(&client, &config, seeds).await;

    write_corpus(&cli.output, &records)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    tracing::info!(
        "Harvest completed: content from {} seed URLs",
        records.len()
    );
    Ok(())
}

/// Merges positional seeds with the optional seeds file
fn build_seed_list(cli: &Cli) -> anyhow::Result<SeedList> {
    let mut entries = cli.seeds.clone();

    if let Some(path) = &cli.seeds_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        entries.extend(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .map(String::from),
        );
    }

    Ok(SeedList::from_strings(entries))
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("magpie_harvest=info,warn"),
            1 => EnvFilter::new("magpie_harvest=debug,info"),
            2 => EnvFilter::new("magpie_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
