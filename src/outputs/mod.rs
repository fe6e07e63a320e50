//! Output generation for scraped records.
//!
//! # Submodules
//!
//! - [`json`]: Writes one run's records to a dated JSON snapshot
//!
//! # Output Structure
//!
//! ```text
//! data/
//! └── {host}-{DD_MM_YYYY}.json
//! ```

pub mod json;

pub use json::JsonStore;
