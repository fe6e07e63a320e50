//! Error types for every layer of the scraping pipeline.
//!
//! Transport and parse failures stay distinct all the way up: a
//! [`ScrapeError`] carries the URL that failed plus a typed [`ScrapeCause`],
//! so callers can match on the underlying kind instead of a message.

use thiserror::Error;

/// A single HTTP GET that did not yield a body.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS resolution or TCP/TLS connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a status code >= 400.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Any other request failure (redirect loop, invalid URL, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// The page was fetched but its HTML did not match the expected layout.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A required sub-field is absent from an item fragment.
    #[error("missing required field '{field}' (selector `{selector}`)")]
    MissingField {
        field: &'static str,
        selector: &'static str,
    },

    /// CSS selector parsing failed.
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A next-page href could not be resolved to an absolute URL.
    #[error("invalid next-page link '{href}': {message}")]
    InvalidLink { href: String, message: String },
}

/// Underlying kind of a [`ScrapeError`].
#[derive(Error, Debug)]
pub enum ScrapeCause {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure of a whole `scrape` run, tagged with the page that caused it.
#[derive(Error, Debug)]
#[error("failed to scrape '{url}': {cause}")]
pub struct ScrapeError {
    pub url: String,
    #[source]
    pub cause: ScrapeCause,
}

impl ScrapeError {
    pub fn new(url: impl Into<String>, cause: impl Into<ScrapeCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }

    /// True when the run failed on the network side rather than in parsing.
    pub fn is_transport(&self) -> bool {
        matches!(self.cause, ScrapeCause::Transport(_))
    }
}

/// Registration bookkeeping errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("an extractor for site '{0}' is already registered")]
    Duplicate(String),

    #[error("no extractor registered for site '{0}'")]
    NotRegistered(String),
}

/// Writing or reading a JSON snapshot failed.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
