// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use crashscraper::{config, ScrapeConfig, Scraper};
use tracing::{info, info_span};
use tracing_subscriber::{fmt, EnvFilter};

/// Scrape planecrashinfo.com year pages into output.json
#[derive(Parser, Debug)]
struct Args {
    /// First year to scrape (inclusive)
    #[arg(short, long, default_value_t = config::START_YEAR)]
    start: i32,

    /// Last year to scrape (inclusive); defaults to the current year
    #[arg(short, long, default_value_t = config::current_year())]
    end: i32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) logging, scoped to this run ──────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .finish();
    let _log_guard = tracing::subscriber::set_default(subscriber);

    // ─── 2) scrape ───────────────────────────────────────────────────
    let cfg = ScrapeConfig::new(args.start, args.end);
    let span = info_span!("crashscraper", start = cfg.start_year, end = cfg.end_year);
    let mut scraper = Scraper::new(cfg)?.with_span(span);
    scraper.scrape().await?;

    // ─── 3) write output ─────────────────────────────────────────────
    let out = &scraper.config().output_path;
    let data = scraper.processed_data()?;
    data.write_json(out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!(records = data.data.len(), path = %out.display(), "wrote output");

    Ok(())
}
