// src/fetch/links.rs

use tracing::{debug, trace, warn};
use url::Url;

use crate::error::ScrapeError;
use crate::html::{Node, Page};

/// Navigation link on the index page that is not a year.
pub const INDEX_LINK: &str = "index.html";

/// Return the href of every year link on the index page whose year falls in
/// `start_year..=end_year`, in document order.
///
/// Anchors whose text is not a year are logged and skipped.
pub fn select_year_links(index_page: &[u8], start_year: i32, end_year: i32) -> Vec<String> {
    let page = Page::parse(index_page);
    filter_year_links(&page.anchors(), start_year, end_year)
}

/// Same as [`select_year_links`], over already-parsed anchors.
pub fn filter_year_links<N: Node>(anchors: &[N], start_year: i32, end_year: i32) -> Vec<String> {
    let mut hrefs = Vec::new();
    for anchor in anchors {
        let Some(href) = anchor.attr("href") else {
            debug!("anchor without href; skipping");
            continue;
        };
        if href == INDEX_LINK {
            continue;
        }

        let year = match parse_year(&anchor.text()) {
            Ok(year) => year,
            Err(e) => {
                warn!(href, error = %e, "skipping non-year link");
                continue;
            }
        };

        // years are not assumed to be in order
        if year < start_year || year > end_year {
            trace!(href, year, "out of range");
            continue;
        }

        hrefs.push(normalize_href(href));
    }
    hrefs
}

pub fn parse_year(text: &str) -> Result<i32, ScrapeError> {
    let text = text.trim();
    text.parse().map_err(|source| ScrapeError::YearParse {
        text: text.to_string(),
        source,
    })
}

/// Some year links on the index page lack the leading `/`.
pub fn normalize_href(href: &str) -> String {
    if href.starts_with('/') {
        href.to_string()
    } else {
        format!("/{}", href)
    }
}

/// Join a (normalised) href to the site root.
pub fn resolve(base: &Url, href: &str) -> Result<Url, ScrapeError> {
    Ok(base.join(&normalize_href(href))?)
}
