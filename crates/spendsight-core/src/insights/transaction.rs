//! Single-transaction spending insight
//!
//! Generated when a new transaction arrives: its amount is weighed
//! against the month-to-date total for the same main category and a
//! fixed per-category threshold table.

use chrono::Datelike;

use crate::models::{Classification, Transaction};

use super::types::{Insight, InsightKind, TransactionRef};

/// Threshold used for categories absent from the table
const DEFAULT_THRESHOLD: f64 = 300.0;

/// Recommended monthly spending thresholds per main category
const CATEGORY_THRESHOLDS: &[(&str, f64)] = &[
    ("Food and Drink", 500.0),
    ("Shopping", 300.0),
    ("Entertainment", 200.0),
    ("Transportation", 250.0),
    ("Housing", 1500.0),
    ("Travel", 500.0),
    ("Healthcare", 200.0),
];

fn threshold_for(category: &str) -> f64 {
    CATEGORY_THRESHOLDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, t)| *t)
        .unwrap_or(DEFAULT_THRESHOLD)
}

/// Generate the insight for a newly recorded transaction.
///
/// `history` is the full transaction collection; entries matching the
/// new transaction's dedup key are excluded before its amount is added
/// back, so the total is correct whether or not the transaction has
/// already been appended to the collection. The month window is the
/// transaction's own calendar month, which keeps the result
/// deterministic for identical inputs.
pub fn transaction_insight(transaction: &Transaction, history: &[Transaction]) -> Insight {
    let amount = transaction.amount.abs();
    let category = transaction.main_category().to_string();
    let is_want = transaction.classification == Classification::Want;

    let month = transaction.date.month();
    let year = transaction.date.year();
    let self_key = transaction.dedup_key();

    let prior_total: f64 = history
        .iter()
        .filter(|t| {
            t.date.month() == month
                && t.date.year() == year
                && t.main_category() == category
                && t.dedup_key() != self_key
        })
        .map(|t| t.amount.abs())
        .sum();
    let category_total = prior_total + amount;

    let threshold = threshold_for(&category);

    let insight = if category_total > threshold {
        Insight::new(
            InsightKind::Warning,
            format!("High {} Spending", category),
            format!(
                "You've spent ${:.2} on {} this month, which exceeds the recommended limit of ${}. Consider reducing expenses in this area.",
                category_total, category, threshold
            ),
        )
    } else if amount > threshold * 0.5 && is_want {
        Insight::new(
            InsightKind::Warning,
            "Large Discretionary Purchase",
            format!(
                "This ${:.2} {} expense is classified as a \"want\". That's a significant purchase - make sure it aligns with your financial goals.",
                amount, category
            ),
        )
    } else if category_total > threshold * 0.8 {
        Insight::new(
            InsightKind::Info,
            format!("Approaching {} Budget", category),
            format!(
                "You're approaching your monthly {} budget. You've spent ${:.2} of your ${} recommended limit.",
                category, category_total, threshold
            ),
        )
    } else if amount < 10.0 && is_want {
        Insight::new(
            InsightKind::Info,
            "Small Purchases Add Up",
            format!(
                "This ${:.2} purchase may seem small, but small frequent expenses can add up quickly. Try tracking these minor expenses.",
                amount
            ),
        )
    } else {
        Insight::new(
            InsightKind::Success,
            "Healthy Spending",
            format!(
                "Your ${:.2} {} expense is within reasonable limits. Keep up the good financial habits!",
                amount, category
            ),
        )
    };

    insight.with_transaction(TransactionRef {
        name: transaction.name.clone(),
        amount: transaction.amount,
        category: transaction.category.clone(),
        date: transaction.date,
    })
}
