//! Aggregate dashboard insights
//!
//! Pattern checks over the full transaction history. The checks are
//! independent; any subset may fire on one call. When nothing fires a
//! single "all healthy" insight is emitted instead.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::catalog::CategoryCatalog;
use crate::categorize::categorize;
use crate::models::{Classification, Transaction};

use super::types::{Insight, InsightKind};

/// Wants share of total spend above this fraction triggers a warning
const WANTS_SHARE_LIMIT: f64 = 0.35;
/// Food and Drink share of total spend above this fraction triggers a warning
const FOOD_SHARE_LIMIT: f64 = 0.25;
/// Weekend share of total spend above this fraction triggers an info note
const WEEKEND_SHARE_LIMIT: f64 = 0.40;
/// A want transaction below this amount counts as a small purchase
const SMALL_PURCHASE_CEILING: f64 = 20.0;
/// More than this many small want purchases in the current month fires
const SMALL_PURCHASE_COUNT: usize = 5;

/// Generate dashboard-level insights over the full history.
///
/// `today` anchors the "current month" window for the small-purchase
/// frequency check; callers pass the local date so the core stays
/// deterministic. Output order follows the check order below and is
/// identical across repeated calls on the same input.
pub fn dashboard_insights(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
    today: NaiveDate,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    let total: f64 = transactions.iter().map(|t| t.amount.abs()).sum();

    // 1. High discretionary spending
    let wants_total: f64 = transactions
        .iter()
        .filter(|t| t.classification == Classification::Want)
        .map(|t| t.amount.abs())
        .sum();
    if total > 0.0 && wants_total / total > WANTS_SHARE_LIMIT {
        insights.push(Insight::new(
            InsightKind::Warning,
            "High Discretionary Spending",
            format!(
                "Wants account for {:.1}% of your spending (${:.2} of ${:.2}). Consider shifting more towards needs and savings.",
                wants_total / total * 100.0,
                wants_total,
                total
            ),
        ));
    }

    // 2. Frequent small want purchases this month
    let small_purchases: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| {
            t.classification == Classification::Want
                && t.amount.abs() < SMALL_PURCHASE_CEILING
                && t.date.month() == today.month()
                && t.date.year() == today.year()
        })
        .collect();
    if small_purchases.len() > SMALL_PURCHASE_COUNT {
        let small_total: f64 = small_purchases.iter().map(|t| t.amount.abs()).sum();
        insights.push(Insight::new(
            InsightKind::Info,
            "Frequent Small Purchases",
            format!(
                "You've made {} small discretionary purchases this month totaling ${:.2}. These minor expenses add up quickly.",
                small_purchases.len(),
                small_total
            ),
        ));
    }

    // 3. Food and Drink share of spending
    let food_total: f64 = transactions
        .iter()
        .filter(|t| categorize(t, catalog) == "Food and Drink")
        .map(|t| t.amount.abs())
        .sum();
    if total > 0.0 && food_total / total > FOOD_SHARE_LIMIT {
        insights.push(Insight::new(
            InsightKind::Warning,
            "High Food and Drink Spending",
            format!(
                "Food and Drink makes up {:.1}% of your spending (${:.2}). Cooking at home more often could free up budget.",
                food_total / total * 100.0,
                food_total
            ),
        ));
    }

    // 4. Weekend spending share
    let weekend_total: f64 = transactions
        .iter()
        .filter(|t| matches!(t.date.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|t| t.amount.abs())
        .sum();
    if total > 0.0 && weekend_total / total > WEEKEND_SHARE_LIMIT {
        insights.push(Insight::new(
            InsightKind::Info,
            "Weekend Spending",
            format!(
                "{:.1}% of your spending (${:.2}) happens on weekends. Planning weekend activities ahead can help keep it in check.",
                weekend_total / total * 100.0,
                weekend_total
            ),
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Success,
            "Healthy Spending Habits",
            "No spending concerns detected. Keep up the good financial habits!",
        ));
    }

    insights
}
