//! Site extractors.
//!
//! Each target site gets its own type implementing [`Extractor`]. An extractor
//! owns the per-site parsing rules and its pagination policy; it is handed a
//! starting URL and returns every record it collected, in page order.
//!
//! # Supported Sites
//!
//! | Site | Module | Item selector | Notes |
//! |------|--------|---------------|-------|
//! | quotes.toscrape.com | [`quotes`] | `div.quote` | Follows `li.next` links up to a page ceiling |
//!
//! # Failure Model
//!
//! A fetch or parse failure on any page aborts the whole run with a
//! [`ScrapeError`]; nothing collected from earlier pages is returned.

use crate::error::ScrapeError;
use crate::models::Record;

pub mod quotes;

pub use quotes::{QuotesConfig, QuotesExtractor};

/// Per-site scraping contract.
///
/// `scrape` takes `&mut self` because extractors keep per-run bookkeeping
/// (such as the running item count used by a page ceiling) on the instance.
pub trait Extractor {
    fn scrape(&mut self, url: &str) -> Result<Vec<Record>, ScrapeError>;
}
