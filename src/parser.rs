//! Selector-based HTML queries.
//!
//! A thin layer over `scraper` that turns selector failures into
//! [`ParseError`]s and normalizes element text (concatenated, trimmed).

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// Parse a CSS selector, keeping the offending text on failure.
pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// A parsed HTML document.
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching `css`, in document order.
    pub fn items(&self, css: &str) -> Result<Vec<Fragment<'_>>, ParseError> {
        let sel = selector(css)?;
        Ok(self.document.select(&sel).map(Fragment).collect())
    }

    /// Attribute `attr` of the first element matching `css`, if both exist.
    ///
    /// Empty attribute values count as absent.
    pub fn attr(&self, css: &str, attr: &str) -> Result<Option<String>, ParseError> {
        let sel = selector(css)?;
        Ok(self
            .document
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string))
    }
}

/// One item-level element of a page.
#[derive(Clone, Copy)]
pub struct Fragment<'a>(ElementRef<'a>);

impl<'a> Fragment<'a> {
    /// Trimmed text of the first descendant matching `css`.
    pub fn field(&self, css: &str) -> Result<Option<String>, ParseError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(element_text))
    }

    /// Trimmed text of every descendant matching `css`, in document order.
    pub fn fields(&self, css: &str) -> Result<Vec<String>, ParseError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(element_text).collect())
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
