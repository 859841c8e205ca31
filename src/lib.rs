// src/lib.rs

//! Scrapes yearly aviation-incident tables from planecrashinfo.com into a
//! header-labelled, row-oriented dataset.

pub mod config;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod html;
pub mod process;
pub mod schema;
pub mod scrape;

pub use config::ScrapeConfig;
pub use dataset::ProcessedDataset;
pub use error::ScrapeError;
pub use scrape::Scraper;
