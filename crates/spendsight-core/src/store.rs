//! Local JSON persistence
//!
//! Best-effort cache of two named records: the transaction list and
//! the category catalog, each round-tripped as serialized JSON text in
//! its own file. The core computation functions never touch the store;
//! the composition root loads state, calls the core, and saves.
//!
//! Load is deliberately forgiving: a payload that is not a list (for
//! transactions) or not an object (for the catalog) is discarded and
//! the file reset to the empty default. Individual malformed records
//! are skipped with a warning rather than failing the whole load.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::CategoryCatalog;
use crate::error::{Error, Result};
use crate::models::Transaction;

const TRANSACTIONS_FILE: &str = "transactions.json";
const BUDGETS_FILE: &str = "budgets.json";

/// File-backed store rooted at a data directory
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store at an explicit directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store at the platform data directory
    /// (`$SPENDSIGHT_DATA_DIR` overrides).
    pub fn open_default() -> Result<Self> {
        let dir = match std::env::var("SPENDSIGHT_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .ok_or_else(|| Error::Storage("No platform data directory".into()))?
                .join("spendsight"),
        };
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Write serialized text atomically: temp file in the same
    /// directory, then rename over the target.
    fn write_text(&self, file: &str, text: &str) -> Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(self.path(file))
            .map_err(|e| Error::Storage(format!("Failed to persist {}: {}", file, e)))?;
        Ok(())
    }

    /// Load the transaction list. Missing file or non-list payload
    /// resets to an empty list; malformed entries are skipped.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let path = self.path(TRANSACTIONS_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.save_transactions(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Stored transactions are not valid JSON, resetting");
                self.save_transactions(&[])?;
                return Ok(Vec::new());
            }
        };

        let Value::Array(items) = value else {
            warn!("Stored transactions payload is not a list, resetting");
            self.save_transactions(&[])?;
            return Ok(Vec::new());
        };

        let mut transactions = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Transaction>(item) {
                Ok(tx) => transactions.push(tx),
                // Typically a record missing its amount or date
                Err(e) => warn!(error = %e, "Skipping malformed transaction record"),
            }
        }
        debug!(count = transactions.len(), "Loaded transactions");
        Ok(transactions)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let text = serde_json::to_string_pretty(transactions)?;
        self.write_text(TRANSACTIONS_FILE, &text)?;
        debug!(count = transactions.len(), "Saved transactions");
        Ok(())
    }

    /// Load the category catalog, falling back to the defaults when
    /// nothing valid is stored.
    pub fn load_catalog(&self) -> Result<CategoryCatalog> {
        let path = self.path(BUDGETS_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let catalog = CategoryCatalog::default_catalog();
                self.save_catalog(&catalog)?;
                return Ok(catalog);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<CategoryCatalog>(&text) {
            Ok(catalog) => Ok(catalog),
            Err(e) => {
                warn!(error = %e, "Stored catalog is invalid, resetting to defaults");
                let catalog = CategoryCatalog::default_catalog();
                self.save_catalog(&catalog)?;
                Ok(catalog)
            }
        }
    }

    pub fn save_catalog(&self, catalog: &CategoryCatalog) -> Result<()> {
        let text = serde_json::to_string_pretty(catalog)?;
        self.write_text(BUDGETS_FILE, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;
    use chrono::NaiveDate;

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn tx(name: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            name: name.into(),
            amount,
            date: date.parse::<NaiveDate>().unwrap(),
            category: "Shopping".into(),
            classification: Classification::Want,
            confidence: 80.0,
        }
    }

    #[test]
    fn missing_files_initialize_to_defaults() {
        let (_dir, store) = store();
        assert!(store.load_transactions().unwrap().is_empty());
        let catalog = store.load_catalog().unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn transactions_round_trip() {
        let (_dir, store) = store();
        let txs = vec![tx("Coffee", -4.5, "2024-03-05"), tx("Rent", -1200.0, "2024-03-01")];
        store.save_transactions(&txs).unwrap();
        let loaded = store.load_transactions().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Coffee");
        assert_eq!(loaded[1].amount, -1200.0);
    }

    #[test]
    fn non_list_payload_is_discarded() {
        let (_dir, store) = store();
        fs::write(store.path(TRANSACTIONS_FILE), r#"{"oops": true}"#).unwrap();
        assert!(store.load_transactions().unwrap().is_empty());
        // The file was reset, not left corrupt
        let text = fs::read_to_string(store.path(TRANSACTIONS_FILE)).unwrap();
        assert_eq!(text.trim(), "[]");
    }

    #[test]
    fn garbage_text_is_discarded() {
        let (_dir, store) = store();
        fs::write(store.path(TRANSACTIONS_FILE), "not json at all").unwrap();
        assert!(store.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn records_missing_required_fields_are_skipped() {
        let (_dir, store) = store();
        fs::write(
            store.path(TRANSACTIONS_FILE),
            r#"[
                {"name":"Good","amount":-5.0,"date":"2024-03-05"},
                {"name":"No amount","date":"2024-03-06"},
                {"name":"No date","amount":-7.0}
            ]"#,
        )
        .unwrap();
        let loaded = store.load_transactions().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Good");
    }

    #[test]
    fn catalog_round_trips_with_edited_limit() {
        let (_dir, store) = store();
        let mut draft = store.load_catalog().unwrap().draft();
        draft.set_limit("Shopping", "425.50");
        store.save_catalog(&draft.commit()).unwrap();
        let loaded = store.load_catalog().unwrap();
        assert_eq!(loaded.get("Shopping").unwrap().limit, 425.5);
    }

    #[test]
    fn hand_edited_catalog_regains_other_on_load() {
        let (_dir, store) = store();
        fs::write(
            store.path(BUDGETS_FILE),
            r##"{"categories":[
                {"name":"Food and Drink","limit":500.0,"color":"#4CAF50","terms":["food"]},
                {"name":"Food and Drink","limit":999.0,"color":"#000000","terms":[]}
            ]}"##,
        )
        .unwrap();
        let catalog = store.load_catalog().unwrap();
        assert!(catalog.contains("Other"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Food and Drink").unwrap().limit, 500.0);
    }

    #[test]
    fn invalid_catalog_resets_to_defaults() {
        let (_dir, store) = store();
        fs::write(store.path(BUDGETS_FILE), "[1,2,3]").unwrap();
        let catalog = store.load_catalog().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.contains("Other"));
    }
}
