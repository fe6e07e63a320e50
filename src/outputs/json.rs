//! JSON snapshot output.
//!
//! This module writes the records of one run to a dated JSON file and reads
//! snapshots back.
//!
//! # Output Structure
//!
//! ```text
//! data/
//! ├── quotes.toscrape.com-06_05_2025.json
//! ├── quotes.toscrape.com-07_05_2025.json
//! └── unknown-07_05_2025.json
//! ```
//!
//! # Naming
//!
//! The host comes from the URL the run *started* from, not the last page
//! reached. An empty record list is always written under `unknown`, even when
//! the URL has a perfectly good host. Reruns on the same day overwrite.

use crate::error::PersistError;
use crate::models::Record;
use crate::utils::{UNKNOWN_HOST, date_stamp, ensure_dir, extract_host};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

/// Default snapshot directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Writes record snapshots under a root directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Snapshot path for `records` scraped from `source_url` on `date`.
    ///
    /// The path is `{root}/{host}-{DD_MM_YYYY}.json`.
    pub fn snapshot_path(&self, records: &[Record], source_url: &str, date: NaiveDate) -> PathBuf {
        let host = if records.is_empty() {
            UNKNOWN_HOST
        } else {
            extract_host(source_url)
        };
        self.root.join(format!("{}-{}.json", host, date_stamp(date)))
    }

    /// Write `records` to today's snapshot for `source_url`.
    ///
    /// # Returns
    ///
    /// The path written to.
    pub fn save(&self, records: &[Record], source_url: &str) -> Result<PathBuf, PersistError> {
        self.save_on(records, source_url, Local::now().date_naive())
    }

    /// Write `records` to the snapshot for `source_url` on `date`.
    ///
    /// Creates the output directory if needed. The file is pretty-printed
    /// UTF-8 JSON (2-space indent, non-ASCII left unescaped) and replaces any
    /// existing file at the same path.
    #[instrument(level = "info", skip(self, records), fields(count = records.len(), root = %self.root.display()))]
    pub fn save_on(
        &self,
        records: &[Record],
        source_url: &str,
        date: NaiveDate,
    ) -> Result<PathBuf, PersistError> {
        let path = self.snapshot_path(records, source_url, date);
        let json = serde_json::to_string_pretty(records)?;

        if let Some(dir) = path.parent() {
            if let Err(e) = ensure_dir(dir) {
                error!(dir = %dir.display(), error = %e, "Failed to create output dir");
                return Err(e.into());
            }
        }

        fs::write(&path, json)?;
        info!(path = %path.display(), "Wrote JSON snapshot");
        Ok(path)
    }

    /// Read a snapshot written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Vec<Record>, PersistError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
