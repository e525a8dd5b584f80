//! Monthly per-category spend aggregation

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryCatalog;
use crate::categorize::categorize;
use crate::models::Transaction;

/// Per-category absolute spend for one calendar month. Rebuilt from
/// scratch on every recompute, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpendingSnapshot {
    /// Calendar month, 1-12
    pub month: u32,
    pub year: i32,
    totals: HashMap<String, f64>,
}

impl CategorySpendingSnapshot {
    /// Accumulated spend for a category; categories outside the
    /// snapshot report 0.
    pub fn spend(&self, category: &str) -> f64 {
        self.totals.get(category).copied().unwrap_or(0.0)
    }

    /// Sum across all categories
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Aggregate absolute spend per budget category for one calendar month.
///
/// `month` is 1-based (January = 1). Every catalog category is present
/// in the result, zero-valued when nothing matched; an empty
/// transaction list yields an all-zero snapshot.
pub fn aggregate(
    transactions: &[Transaction],
    month: u32,
    year: i32,
    catalog: &CategoryCatalog,
) -> CategorySpendingSnapshot {
    let mut totals: HashMap<String, f64> = catalog
        .iter()
        .map(|c| (c.name.clone(), 0.0))
        .collect();

    for tx in transactions {
        if tx.date.month() != month || tx.date.year() != year {
            continue;
        }
        let category = categorize(tx, catalog);
        *totals.entry(category.to_string()).or_insert(0.0) += tx.amount.abs();
    }

    tracing::debug!(month, year, categories = totals.len(), "Aggregated snapshot");

    CategorySpendingSnapshot { month, year, totals }
}
