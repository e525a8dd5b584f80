//! Month-over-month spending comparison

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryCatalog;
use crate::categorize::categorize;
use crate::models::Transaction;

/// Number of months kept in a trend series
const TREND_WINDOW: usize = 6;

/// A calendar (year, month) bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable label, e.g. "March 2024"
    pub fn label(&self) -> String {
        // Day 1 always exists; month is 1-12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

/// Spending summary for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyComparisonEntry {
    pub month_key: MonthKey,
    pub label: String,
    pub total_spending: f64,
    pub per_category_spending: HashMap<String, f64>,
    pub transaction_count: usize,
}

fn build_entries(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
) -> Vec<MonthlyComparisonEntry> {
    let mut groups: HashMap<MonthKey, Vec<&Transaction>> = HashMap::new();
    for tx in transactions {
        groups.entry(MonthKey::from_date(&tx.date)).or_default().push(tx);
    }

    let mut entries: Vec<MonthlyComparisonEntry> = groups
        .into_iter()
        .map(|(key, txs)| {
            let mut per_category: HashMap<String, f64> = HashMap::new();
            let mut total = 0.0;
            for tx in &txs {
                let amount = tx.amount.abs();
                total += amount;
                *per_category
                    .entry(categorize(tx, catalog).to_string())
                    .or_insert(0.0) += amount;
            }
            MonthlyComparisonEntry {
                month_key: key,
                label: key.label(),
                total_spending: total,
                per_category_spending: per_category,
                transaction_count: txs.len(),
            }
        })
        .collect();

    entries.sort_by_key(|e| e.month_key);
    entries
}

/// Build the "months with data" comparison listing, most recent month
/// first. Fewer than two distinct months is not comparable and yields
/// an empty result.
pub fn compare_months(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
) -> Vec<MonthlyComparisonEntry> {
    let mut entries = build_entries(transactions, catalog);
    if entries.len() < 2 {
        return Vec::new();
    }
    entries.reverse();
    entries
}

/// Build a chronological trend series (oldest first), keeping only the
/// most recent six months with data.
pub fn trend_series(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
) -> Vec<MonthlyComparisonEntry> {
    let entries = build_entries(transactions, catalog);
    let skip = entries.len().saturating_sub(TREND_WINDOW);
    entries.into_iter().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;

    fn tx(amount: f64, date: &str, category: &str) -> Transaction {
        Transaction {
            name: "test".into(),
            amount,
            date: date.parse::<NaiveDate>().unwrap(),
            category: category.into(),
            classification: Classification::Uncategorized,
            confidence: 50.0,
        }
    }

    #[test]
    fn single_month_is_not_comparable() {
        let catalog = CategoryCatalog::default_catalog();
        let txs = vec![
            tx(-60.0, "2024-03-05", "Food and Drink > Groceries"),
            tx(-40.0, "2024-03-09", "Food and Drink > Restaurants"),
        ];
        assert!(compare_months(&txs, &catalog).is_empty());
    }

    #[test]
    fn empty_history_is_not_comparable() {
        let catalog = CategoryCatalog::default_catalog();
        assert!(compare_months(&[], &catalog).is_empty());
    }

    #[test]
    fn two_months_sort_most_recent_first() {
        let catalog = CategoryCatalog::default_catalog();
        let txs = vec![
            tx(-60.0, "2024-02-05", "Food and Drink > Groceries"),
            tx(-80.0, "2024-03-09", "Food and Drink > Restaurants"),
        ];
        let entries = compare_months(&txs, &catalog);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].month_key, MonthKey { year: 2024, month: 3 });
        assert_eq!(entries[0].label, "March 2024");
        assert_eq!(entries[1].month_key, MonthKey { year: 2024, month: 2 });
    }

    #[test]
    fn year_boundary_sorts_correctly() {
        let catalog = CategoryCatalog::default_catalog();
        let txs = vec![
            tx(-10.0, "2023-12-20", "Shopping"),
            tx(-20.0, "2024-01-05", "Shopping"),
        ];
        let entries = compare_months(&txs, &catalog);
        assert_eq!(entries[0].month_key, MonthKey { year: 2024, month: 1 });
        assert_eq!(entries[1].month_key, MonthKey { year: 2023, month: 12 });
    }

    #[test]
    fn entry_totals_and_counts() {
        let catalog = CategoryCatalog::default_catalog();
        let txs = vec![
            tx(-60.0, "2024-03-05", "Food and Drink > Groceries"),
            tx(25.0, "2024-03-06", "Food and Drink > Restaurants"),
            tx(-100.0, "2024-03-07", "Shopping > Electronics"),
            tx(-40.0, "2024-02-05", "Shopping"),
        ];
        let entries = compare_months(&txs, &catalog);
        let march = &entries[0];
        assert_eq!(march.transaction_count, 3);
        assert_eq!(march.total_spending, 185.0);
        assert_eq!(march.per_category_spending["Food and Drink"], 85.0);
        assert_eq!(march.per_category_spending["Shopping"], 100.0);
    }

    #[test]
    fn trend_series_is_chronological_and_capped_at_six() {
        let catalog = CategoryCatalog::default_catalog();
        let txs: Vec<Transaction> = (1..=8)
            .map(|month| tx(-(month as f64), &format!("2024-{:02}-15", month), "Shopping"))
            .collect();
        let series = trend_series(&txs, &catalog);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month_key, MonthKey { year: 2024, month: 3 });
        assert_eq!(series[5].month_key, MonthKey { year: 2024, month: 8 });
    }

    #[test]
    fn trend_series_with_one_month_still_returns_it() {
        let catalog = CategoryCatalog::default_catalog();
        let txs = vec![tx(-60.0, "2024-03-05", "Food and Drink")];
        let series = trend_series(&txs, &catalog);
        assert_eq!(series.len(), 1);
    }
}
