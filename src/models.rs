//! Data models for scraped records.
//!
//! This module defines the structures passed between extractors and the
//! persistence layer:
//! - [`Record`]: one extracted item as an ordered field → value mapping
//! - [`Quote`]: the typed record produced by the quotes extractor
//!
//! Records are site-agnostic so that any registered extractor can hand its
//! output to the same JSON writer. Field order is insertion order, which keeps
//! snapshot files stable and readable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured item extracted from a page.
///
/// Serializes transparently as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert; later inserts of the same key replace the value
    /// but keep its original position.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// The value of `field` if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// The value of `field` if it is an array made only of strings.
    pub fn get_str_list(&self, field: &str) -> Option<Vec<&str>> {
        self.0
            .get(field)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A quotation as listed on quotes.toscrape.com-style pages.
///
/// # Fields
///
/// * `text` - The quotation, including its typographic quote marks
/// * `author` - Display name of the author
/// * `tags` - Lowercased tags in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl From<Quote> for Record {
    fn from(quote: Quote) -> Self {
        Record::new()
            .with("text", quote.text)
            .with("author", quote.author)
            .with("tags", quote.tags)
    }
}
