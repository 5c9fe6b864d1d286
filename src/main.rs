//! Scrape runner binary.
//!
//! This is the surface the external scheduler talks to: a daily cron job
//! (or an operator) runs `kysd_news`, which performs exactly one pipeline
//! run against the JSON-file store and exits. The admin panel's "refresh"
//! action shells out to the same binary.

use clap::Parser;
use kysd_news::cli::Cli;
use kysd_news::pipeline::Pipeline;
use kysd_news::sources::default_sources;
use kysd_news::store::JsonFileStore;
use kysd_news::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("kysd_news scrape run starting");

    let args = Cli::parse();
    debug!(?args.store, ?args.uploads_dir, ?args.source, "Parsed CLI arguments");

    // Early check: surface uploads-dir permission problems before scraping
    if let Err(e) = ensure_writable_dir(&args.uploads_dir).await {
        error!(
            path = %args.uploads_dir,
            error = %e,
            "Uploads directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let mut sources = default_sources();
    if let Some(name) = &args.source {
        sources.retain(|s| &s.name == name);
        if sources.is_empty() {
            error!(source = %name, "No configured source with that name");
            return Err(format!("unknown source: {name}").into());
        }
    }
    info!(count = sources.len(), "Scraping configured sources");

    let store = JsonFileStore::open(&args.store).await?;
    let pipeline = Pipeline::new(sources, &args.uploads_dir)?;
    let summary = pipeline.run(&store).await?;

    let elapsed = start_time.elapsed();
    info!(
        count = summary.count,
        message = %summary.message,
        ?elapsed,
        secs = elapsed.as_secs(),
        "Scrape run complete"
    );

    Ok(())
}
