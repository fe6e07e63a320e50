//! Runs one registered extractor and persists what it returns.

use std::path::PathBuf;

use tracing::{error, info, instrument, warn};

use crate::error::{PersistError, RegistryError, ScrapeError};
use crate::models::Record;
use crate::outputs::JsonStore;
use crate::registry::Registry;
use crate::scrapers::Extractor;

/// Printed when a run yields nothing, whether it failed or found no records.
pub const FAILURE_NOTICE: &str = "Scraping failed.";

/// Records produced by a run and the snapshot they were saved to.
#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<Record>,
    pub path: PathBuf,
    /// Set when the scrape failed and an empty list was saved in its place.
    pub failure: Option<ScrapeError>,
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// One-line summary for the terminal.
    pub fn notice(&self) -> String {
        if self.is_failure() || self.records.is_empty() {
            return FAILURE_NOTICE.to_string();
        }
        format!(
            "Successfully scraped {} records into {}.",
            self.records.len(),
            self.path.display()
        )
    }
}

/// Ties a [`Registry`] to a [`JsonStore`].
pub struct Orchestrator {
    registry: Registry,
    store: JsonStore,
}

impl Orchestrator {
    pub fn new(registry: Registry, store: JsonStore) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Register an extractor after construction.
    pub fn register<E, F>(&mut self, site_id: &str, factory: F) -> Result<(), RegistryError>
    where
        E: Extractor + 'static,
        F: FnOnce() -> E,
    {
        self.registry.register(site_id, factory)
    }

    /// Scrape `url` with the extractor registered as `site_id` and save the
    /// records under the snapshot name derived from `url`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no extractor is registered for `site_id`. A scrape
    /// failure is logged and replaced by an empty list, which is still saved;
    /// the error is kept in [`RunOutcome::failure`]. Only a failed write is
    /// returned as an error.
    #[instrument(level = "info", skip(self))]
    pub fn run(&mut self, site_id: &str, url: &str) -> Result<Option<RunOutcome>, PersistError> {
        let Some(extractor) = self.registry.get_mut(site_id) else {
            warn!("No extractor registered for site");
            return Ok(None);
        };

        let (records, failure) = match extractor.scrape(url) {
            Ok(records) => (records, None),
            Err(e) => {
                error!(error = %e, "Scrape failed; saving an empty snapshot");
                (Vec::new(), Some(e))
            }
        };
        let path = self.store.save(&records, url)?;
        info!(count = records.len(), path = %path.display(), "Run complete");

        Ok(Some(RunOutcome {
            records,
            path,
            failure,
        }))
    }
}
