//! CSV transaction import
//!
//! Parses exported transaction CSVs into raw (unclassified)
//! transactions. Header names are matched tolerantly so exports from
//! different tools work without reshaping. Rows missing a parsable
//! amount or date are skipped, never fatal.

use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::Result;
use crate::models::{RawTransaction, Transaction};

/// Column indexes resolved from the header row
struct ColumnMap {
    name: Option<usize>,
    amount: Option<usize>,
    date: Option<usize>,
    category: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = Self {
            name: None,
            amount: None,
            date: None,
            category: None,
        };
        for (i, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "name" | "description" | "merchant" => map.name.get_or_insert(i),
                "amount" => map.amount.get_or_insert(i),
                "date" | "transaction date" => map.date.get_or_insert(i),
                "category" => map.category.get_or_insert(i),
                _ => continue,
            };
        }
        map
    }
}

/// Parse a date in ISO (2024-03-05) or US (03/05/2024) form
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Parse an amount, tolerating "$" prefixes and thousands separators
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Parse CSV data into raw transactions.
///
/// Rows without a parsable amount or date are excluded from the result
/// (debug-logged); name and category default to empty strings.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers);
    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let amount = parse_amount(field(columns.amount));
        let date = parse_date(field(columns.date));
        let (Some(amount), Some(date)) = (amount, date) else {
            skipped += 1;
            continue;
        };

        transactions.push(RawTransaction {
            name: field(columns.name).trim().to_string(),
            amount,
            date,
            category: field(columns.category).trim().to_string(),
        });
    }

    debug!(
        parsed = transactions.len(),
        skipped, "Parsed transaction CSV"
    );
    Ok(transactions)
}

/// Drop rows whose `(name, amount, date)` dedup key already exists in
/// the stored transaction set, so re-importing the same file does not
/// duplicate records or re-trigger notifications.
pub fn dedup(raw: Vec<RawTransaction>, existing: &[Transaction]) -> Vec<RawTransaction> {
    let mut seen: HashSet<String> = existing.iter().map(|t| t.dedup_key()).collect();
    let before = raw.len();
    let deduped: Vec<RawTransaction> = raw
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect();
    if deduped.len() < before {
        debug!(dropped = before - deduped.len(), "Dropped duplicate rows");
    }
    deduped
}
