// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, Local};

pub const BASE_URL: &str = "https://planecrashinfo.com";
pub const INDEX_PATH: &str = "/database.htm";
pub const START_YEAR: i32 = 1920;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const OUTPUT_FILE: &str = "output.json";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// First year to scrape, inclusive.
    pub start_year: i32,
    /// Last year to scrape, inclusive.
    pub end_year: i32,
    pub base_url: String,
    pub index_path: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            start_year: START_YEAR,
            end_year: current_year(),
            base_url: BASE_URL.to_string(),
            index_path: INDEX_PATH.to_string(),
            timeout: REQUEST_TIMEOUT,
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl ScrapeConfig {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            ..Default::default()
        }
    }

    /// Points the scraper at a different site root. Used by tests against a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ScrapeConfig::default();
        assert_eq!(cfg.start_year, 1920);
        assert_eq!(cfg.end_year, current_year());
        assert_eq!(cfg.base_url, "https://planecrashinfo.com");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.output_path, PathBuf::from("output.json"));
    }
}
