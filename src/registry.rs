//! Site identifier → extractor lookup.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::error::RegistryError;
use crate::scrapers::Extractor;

/// Owns one extractor instance per site identifier.
#[derive(Default)]
pub struct Registry {
    extractors: BTreeMap<String, Box<dyn Extractor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an extractor with `factory` and store it under `site_id`.
    ///
    /// Fails without calling `factory` if `site_id` is taken.
    #[instrument(level = "debug", skip(self, factory))]
    pub fn register<E, F>(&mut self, site_id: &str, factory: F) -> Result<(), RegistryError>
    where
        E: Extractor + 'static,
        F: FnOnce() -> E,
    {
        if self.extractors.contains_key(site_id) {
            return Err(RegistryError::Duplicate(site_id.to_string()));
        }
        self.extractors
            .insert(site_id.to_string(), Box::new(factory()));
        debug!("Registered extractor");
        Ok(())
    }

    /// Remove and return the extractor stored under `site_id`.
    #[instrument(level = "debug", skip(self))]
    pub fn unregister(&mut self, site_id: &str) -> Result<Box<dyn Extractor>, RegistryError> {
        let removed = self
            .extractors
            .remove(site_id)
            .ok_or_else(|| RegistryError::NotRegistered(site_id.to_string()))?;
        debug!("Unregistered extractor");
        Ok(removed)
    }

    pub fn get(&self, site_id: &str) -> Option<&dyn Extractor> {
        self.extractors.get(site_id).map(|e| &**e)
    }

    pub fn get_mut(&mut self, site_id: &str) -> Option<&mut (dyn Extractor + 'static)> {
        self.extractors.get_mut(site_id).map(|e| &mut **e)
    }

    pub fn contains(&self, site_id: &str) -> bool {
        self.extractors.contains_key(site_id)
    }

    /// Registered identifiers in sorted order.
    pub fn site_ids(&self) -> impl Iterator<Item = &str> {
        self.extractors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}
