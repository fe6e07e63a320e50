//! Utility functions for host extraction, snapshot dates, and logging.
//!
//! This module provides helpers used throughout the crate:
//! - Host extraction from source URLs for snapshot naming
//! - Date stamp formatting for snapshot filenames
//! - String truncation for log previews
//! - Directory creation for output paths

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Host token used when a URL has no recognizable host.
pub const UNKNOWN_HOST: &str = "unknown";

static HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://([^/]+)").expect("host pattern is valid"));

/// Extract the host portion of an `http(s)` URL.
///
/// This is a plain pattern match rather than full URL parsing: whatever sits
/// between `scheme://` and the next `/` is returned, port included.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_host("https://quotes.toscrape.com/page/1"), "quotes.toscrape.com");
/// assert_eq!(extract_host("ftp://example.com"), "unknown");
/// ```
pub fn extract_host(url: &str) -> &str {
    HOST_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or(UNKNOWN_HOST, |m| m.as_str())
}

/// Format a date as `DD_MM_YYYY` for snapshot filenames.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%d_%m_%Y").to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure a directory exists, creating it and its parents if needed.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    debug!("Created output directory");
    Ok(())
}
