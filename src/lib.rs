//! # page_harvest
//!
//! Scrapes paginated HTML listings into dated JSON snapshots.
//!
//! ## Architecture
//!
//! 1. **Registry**: maps a site identifier to one [`Extractor`](scrapers::Extractor)
//! 2. **Scraping**: the extractor fetches the start page, parses its items and
//!    follows "next" links until the last page or its page ceiling
//! 3. **Output**: the records are written to `data/{host}-{DD_MM_YYYY}.json`
//!
//! [`Orchestrator`](orchestrator::Orchestrator) drives the three steps for a
//! single site and URL.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod models;
pub mod orchestrator;
pub mod outputs;
pub mod parser;
pub mod registry;
pub mod scrapers;
pub mod utils;
