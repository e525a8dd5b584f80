//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `budget` - Budget status, category listing, and limit editing
//! - `compare` - Month-over-month comparison and trend series
//! - `import` - CSV import and single-transaction recording
//! - `insights` - Dashboard spending pattern insights

pub mod budget;
pub mod compare;
pub mod import;
pub mod insights;

// Re-export command functions for main.rs
pub use budget::*;
pub use compare::*;
pub use import::*;
pub use insights::*;

use std::path::Path;

use anyhow::Result;
use spendsight_core::{ClassifierBackend, HttpClassifier, MockClassifier, Store};

/// Open the store at the explicit directory if one was given, otherwise
/// at the default location.
pub fn open_store(data_dir: Option<&Path>) -> Result<Store> {
    let store = match data_dir {
        Some(dir) => Store::open(dir)?,
        None => Store::open_default()?,
    };
    tracing::debug!(dir = %store.dir().display(), "Opened store");
    Ok(store)
}

/// Pick the classification backend: the remote service when
/// CLASSIFIER_HOST is set, the built-in keyword heuristic otherwise.
pub fn classifier() -> Box<dyn ClassifierBackend> {
    match HttpClassifier::from_env() {
        Some(http) => Box::new(http),
        None => Box::new(MockClassifier),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
