// src/scrape.rs

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument, Span};
use url::Url;

use crate::config::ScrapeConfig;
use crate::dataset::ProcessedDataset;
use crate::error::ScrapeError;
use crate::fetch::{links, Fetcher};
use crate::html::Page;
use crate::process::{extract_cells, normalize};

/// Walks the year pages in `[start_year, end_year]` and accumulates their
/// incidents into a single dataset.
pub struct Scraper {
    config: ScrapeConfig,
    fetcher: Fetcher,
    span: Span,
    processed: ProcessedDataset,
}

impl Scraper {
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.timeout)?;
        let span = info_span!(
            "scrape",
            start = config.start_year,
            end = config.end_year
        );
        Ok(Self {
            config,
            fetcher,
            span,
            processed: ProcessedDataset::new(),
        })
    }

    /// Log under the caller's span instead of a fresh one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// The accumulated dataset. Fails until at least one page has produced
    /// both headers and records.
    pub fn processed_data(&self) -> Result<&ProcessedDataset, ScrapeError> {
        if !self.processed.is_ready() {
            return Err(ScrapeError::NotProcessed);
        }
        Ok(&self.processed)
    }

    /// Fetch the index, then fetch and normalise every selected year page in
    /// turn. The first failure aborts the whole run.
    pub async fn scrape(&mut self) -> Result<()> {
        let span = self.span.clone();
        self.scrape_inner().instrument(span).await
    }

    async fn scrape_inner(&mut self) -> Result<()> {
        let base = Url::parse(&self.config.base_url)
            .with_context(|| format!("parsing base url {}", self.config.base_url))?;
        let index_url = links::resolve(&base, &self.config.index_path)?;

        let index = self.fetcher.fetch(&index_url).await?;
        let hrefs =
            links::select_year_links(&index, self.config.start_year, self.config.end_year);
        info!(count = hrefs.len(), "selected year pages");

        for href in &hrefs {
            let url = links::resolve(&base, href)?;
            let body = self
                .fetcher
                .fetch(&url)
                .await
                .with_context(|| format!("fetching year page {}", href))?;

            let page = Page::parse(&body);
            let cells = extract_cells(&page);
            let added = normalize(&cells, &mut self.processed);
            info!(%href, cells = cells.len(), records = added, "processed year page");
        }

        info!(
            pages = hrefs.len(),
            records = self.processed.data.len(),
            "scrape finished"
        );
        Ok(())
    }
}
