//! Quotes scraper.
//!
//! This module scrapes [quotes.toscrape.com](https://quotes.toscrape.com)-style
//! listings. Every page lists up to ten `div.quote` blocks and, except on the
//! last page, a `li.next` link to the following page.
//!
//! # Markup
//!
//! ```text
//! div.quote
//! ├── span.text      required
//! ├── small.author   required
//! └── a.tag *        optional, lowercased
//! li.next > a[href]  next page, appended to the base URL
//! ```
//!
//! # Page Ceiling
//!
//! Pagination stops once the number of quotes collected in the current run
//! reaches `max_pages * items_per_page` while a next link is still present.
//! The check runs after the current page has been counted, so a run over full
//! pages fetches exactly `max_pages` pages. Pages holding fewer quotes than
//! `items_per_page` let the run go further, since the budget is counted in
//! items. A page with no quotes ends pagination regardless of its next link.

use std::collections::BTreeSet;

use tracing::{error, info, instrument, warn};
use url::Url;

use super::Extractor;
use crate::error::{ParseError, ScrapeError, TransportError};
use crate::fetch::{FetchConfig, Fetcher, HttpFetcher};
use crate::models::{Quote, Record};
use crate::parser::{Fragment, Page};

const QUOTE_SELECTOR: &str = "div.quote";
const TEXT_SELECTOR: &str = "span.text";
const AUTHOR_SELECTOR: &str = "small.author";
const TAG_SELECTOR: &str = "a.tag";
const NEXT_SELECTOR: &str = "li.next a";

/// Quotes site settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesConfig {
    /// Site root; next-page hrefs and the start page are resolved against it.
    pub base_url: String,
    /// Nominal maximum number of pages per run.
    pub max_pages: usize,
    /// Expected quotes per full page.
    pub items_per_page: usize,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quotes.toscrape.com".to_string(),
            max_pages: 100,
            items_per_page: 10,
        }
    }
}

impl QuotesConfig {
    /// Item budget for one run.
    pub fn ceiling(&self) -> usize {
        self.max_pages.saturating_mul(self.items_per_page)
    }

    /// First listing page: `{base_url}/page/1`.
    pub fn start_url(&self) -> String {
        format!("{}/page/1", self.base_url.trim_end_matches('/'))
    }
}

/// Extractor for quote listings.
///
/// Besides the [`Extractor`] contract it offers a memoized
/// [`get_all_quotes`](Self::get_all_quotes) that scrapes from the start page
/// once and keeps the result.
pub struct QuotesExtractor<F = HttpFetcher> {
    fetcher: F,
    config: QuotesConfig,
    /// Quotes counted so far in the current run.
    collected: usize,
    /// `None` until the first `get_all_quotes` call.
    cache: Option<Vec<Record>>,
}

impl QuotesExtractor<HttpFetcher> {
    /// Extractor backed by a real HTTP client.
    pub fn with_http(config: QuotesConfig, fetch: &FetchConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpFetcher::new(fetch)?, config))
    }
}

impl<F: Fetcher> QuotesExtractor<F> {
    pub fn new(fetcher: F, config: QuotesConfig) -> Self {
        Self {
            fetcher,
            config,
            collected: 0,
            cache: None,
        }
    }

    pub fn config(&self) -> &QuotesConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Quotes counted by the most recent (or ongoing) run.
    pub fn collected(&self) -> usize {
        self.collected
    }

    /// Every quote reachable from the start page, scraped at most once.
    ///
    /// A failed scrape is logged and cached as an empty list; later calls
    /// return that empty list without fetching until
    /// [`reset_cache`](Self::reset_cache) is called.
    pub fn get_all_quotes(&mut self) -> &[Record] {
        if self.cache.is_none() {
            let start_url = self.config.start_url();
            let records = match self.scrape(&start_url) {
                Ok(records) => records,
                Err(e) => {
                    error!(error = %e, url = %start_url, "Failed to load quotes");
                    Vec::new()
                }
            };
            self.cache = Some(records);
        }
        self.cache.as_deref().unwrap_or_default()
    }

    /// Unique lowercase tags across the cached quotes.
    ///
    /// Empty when nothing is cached yet, or when any cached record lacks a
    /// list of string tags.
    pub fn get_all_tags(&self) -> BTreeSet<String> {
        let Some(records) = &self.cache else {
            return BTreeSet::new();
        };

        let mut tags = BTreeSet::new();
        for (index, record) in records.iter().enumerate() {
            let Some(record_tags) = record.get_str_list("tags") else {
                warn!(index, "Record has no usable 'tags' field; returning no tags");
                return BTreeSet::new();
            };
            tags.extend(record_tags.into_iter().map(str::to_lowercase));
        }
        tags
    }

    /// Forget cached quotes so the next `get_all_quotes` scrapes again.
    pub fn reset_cache(&mut self) {
        self.cache = None;
    }

    /// Fetch and parse one page: its quotes plus the absolute next-page URL.
    #[instrument(level = "info", skip(self))]
    fn scrape_page(&self, url: &str) -> Result<(Vec<Record>, Option<String>), ScrapeError> {
        let html = self
            .fetcher
            .fetch(url)
            .map_err(|e| ScrapeError::new(url, e))?;
        let page = Page::parse(&html);

        let quotes = parse_quotes(&page).map_err(|e| ScrapeError::new(url, e))?;
        let next = self
            .next_page_url(&page)
            .map_err(|e| ScrapeError::new(url, e))?;

        info!(count = quotes.len(), has_next = next.is_some(), "Parsed quotes page");
        Ok((quotes.into_iter().map(Record::from).collect(), next))
    }

    fn next_page_url(&self, page: &Page) -> Result<Option<String>, ParseError> {
        let Some(href) = page.attr(NEXT_SELECTOR, "href")? else {
            return Ok(None);
        };
        let invalid = |message: String| ParseError::InvalidLink {
            href: href.clone(),
            message,
        };
        let base = Url::parse(&self.config.base_url).map_err(|e| invalid(e.to_string()))?;
        // Root-relative hrefs are appended to the base, keeping any path prefix.
        if href.starts_with('/') && !href.starts_with("//") {
            let base = base.as_str().trim_end_matches('/');
            return Ok(Some(format!("{base}{href}")));
        }
        let next = base.join(&href).map_err(|e| invalid(e.to_string()))?;
        Ok(Some(next.to_string()))
    }
}

impl<F: Fetcher> Extractor for QuotesExtractor<F> {
    #[instrument(level = "info", skip(self), fields(ceiling = self.config.ceiling()))]
    fn scrape(&mut self, url: &str) -> Result<Vec<Record>, ScrapeError> {
        let ceiling = self.config.ceiling();
        self.collected = 0;

        let mut records = Vec::new();
        let mut current = url.to_string();
        let mut pages = 0usize;

        loop {
            let (quotes, next) = self.scrape_page(&current)?;
            pages += 1;

            let page_len = quotes.len();
            self.collected += page_len;
            records.extend(quotes);

            let Some(next) = next else {
                break;
            };
            if page_len == 0 {
                warn!(url = %current, "Page has a next link but no quotes; stopping");
                break;
            }
            if self.collected >= ceiling {
                warn!(
                    max_pages = self.config.max_pages,
                    collected = self.collected,
                    "Page ceiling reached; not following next link"
                );
                break;
            }
            current = next;
        }

        info!(pages, count = records.len(), "Finished scraping quotes");
        Ok(records)
    }
}

/// Extract every quote on the page; any quote missing a required field fails
/// the page.
fn parse_quotes(page: &Page) -> Result<Vec<Quote>, ParseError> {
    page.items(QUOTE_SELECTOR)?
        .iter()
        .map(parse_quote)
        .collect()
}

fn parse_quote(fragment: &Fragment<'_>) -> Result<Quote, ParseError> {
    let text = fragment
        .field(TEXT_SELECTOR)?
        .ok_or(ParseError::MissingField {
            field: "text",
            selector: TEXT_SELECTOR,
        })?;
    let author = fragment
        .field(AUTHOR_SELECTOR)?
        .ok_or(ParseError::MissingField {
            field: "author",
            selector: AUTHOR_SELECTOR,
        })?;
    let tags = fragment
        .fields(TAG_SELECTOR)?
        .into_iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    Ok(Quote { text, author, tags })
}
