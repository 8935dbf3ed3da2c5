//! # webmagic_import
//!
//! Imports blog posts from webmagic.agency into a local article store.
//!
//! ## How a run works
//!
//! 1. **Crawl**: walk the blog listing page by page, strictly sequentially,
//!    until a page has no article cards (or a fetch fails)
//! 2. **Filter**: de-duplicate by URL, keep only allow-listed categories,
//!    drop articles older than the cutoff (now minus 4 months)
//! 3. **Replace**: atomically swap the stored article set for the new one
//!
//! Per-page and per-card failures are skipped, never fatal; only a failure
//! of the run itself (for example an unreachable store) surfaces, as a
//! single error message.
//!
//! ## Usage
//!
//! ```sh
//! webmagic_import import
//! webmagic_import list --sort-by published_at --direction desc
//! ```

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod crawl;
mod extract;
mod fetch;
mod filter;
mod models;
mod store;
mod utils;

use cli::{Cli, Command};
use fetch::HttpFetcher;
use filter::run_cutoff;
use models::{SortDirection, SortField};
use store::ArticleStore;

#[tokio::main]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Single top-level error boundary: one message, non-zero exit.
    if let Err(e) = run(args).await {
        error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Import {
            base_url,
            max_pages,
        } => run_import(&args.database_url, &base_url, max_pages).await,
        Command::List { sort_by, direction } => {
            run_list(&args.database_url, &sort_by, &direction).await
        }
    }
}

/// One full crawl-accumulate-replace cycle.
async fn run_import(
    database_url: &str,
    base_url: &str,
    max_pages: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();

    let store = ArticleStore::connect(database_url).await?;
    let fetcher = HttpFetcher::new()?;

    // One timestamp for the whole run; every persisted row carries it.
    let run_ts = Utc::now();
    let cutoff = run_cutoff(run_ts);
    info!(%base_url, %cutoff, "Starting import run");

    let rows = crawl::crawl(&fetcher, base_url, cutoff, run_ts, max_pages).await;

    store.replace_all(&rows).await?;

    let elapsed = start_time.elapsed();
    info!(imported = rows.len(), ?elapsed, "Import complete");
    println!("Imported: {}", rows.len());
    Ok(())
}

/// Print the stored articles as JSON, sorted by normalized inputs.
async fn run_list(
    database_url: &str,
    sort_by: &str,
    direction: &str,
) -> Result<(), Box<dyn Error>> {
    let store = ArticleStore::connect(database_url).await?;

    let sort = SortField::normalize(sort_by);
    let dir = SortDirection::normalize(direction);
    let rows = store.get_all(sort, dir).await?;

    info!(count = rows.len(), ?sort, ?dir, "Listing stored articles");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
