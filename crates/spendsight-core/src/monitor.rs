//! Budget limit monitoring
//!
//! Compares a monthly spending snapshot against catalog limits and
//! emits over-budget and approaching warnings. Warnings are ephemeral
//! and recomputed whenever the snapshot changes.

use serde::{Deserialize, Serialize};

use crate::aggregate::CategorySpendingSnapshot;
use crate::catalog::CategoryCatalog;

/// Spend beyond this fraction of the limit triggers an "approaching"
/// warning.
const APPROACHING_FRACTION: f64 = 0.9;

/// A budget warning for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub category: String,
    pub message: String,
    /// Accumulated spend for the month
    pub amount: f64,
    /// The category's monthly limit
    pub limit: f64,
    /// True when the budget is near but not yet exceeded
    pub approaching: bool,
}

/// Evaluate a snapshot against catalog limits.
///
/// Emits warnings in catalog order: over-budget when spend exceeds the
/// limit, approaching when spend exceeds 90% of it. A zero limit with
/// positive spend is over budget; the overage percentage is reported
/// as 0 in that case rather than dividing by zero.
pub fn evaluate(snapshot: &CategorySpendingSnapshot, catalog: &CategoryCatalog) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for cat in catalog.iter() {
        let spend = snapshot.spend(&cat.name);
        if spend > cat.limit {
            let overspent = spend - cat.limit;
            let percentage = if cat.limit > 0.0 {
                ((spend / cat.limit - 1.0) * 100.0).round()
            } else {
                0.0
            };
            warnings.push(Warning {
                category: cat.name.clone(),
                message: format!(
                    "You've exceeded your {} budget by ${:.2} ({}% over)",
                    cat.name, overspent, percentage
                ),
                amount: spend,
                limit: cat.limit,
                approaching: false,
            });
        } else if spend > cat.limit * APPROACHING_FRACTION {
            let remaining = cat.limit - spend;
            warnings.push(Warning {
                category: cat.name.clone(),
                message: format!(
                    "You're approaching your {} budget limit. ${:.2} remaining.",
                    cat.name, remaining
                ),
                amount: spend,
                limit: cat.limit,
                approaching: true,
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::models::{Classification, Transaction};
    use chrono::NaiveDate;

    fn tx(amount: f64, category: &str) -> Transaction {
        Transaction {
            name: "test".into(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            category: category.into(),
            classification: Classification::Uncategorized,
            confidence: 50.0,
        }
    }

    fn snapshot_for(txs: &[Transaction], catalog: &CategoryCatalog) -> CategorySpendingSnapshot {
        aggregate(txs, 3, 2024, catalog)
    }

    #[test]
    fn no_warning_below_ninety_percent() {
        let catalog = CategoryCatalog::default_catalog();
        // Food and Drink limit is 500; 450 is exactly 90%, not above it
        let snap = snapshot_for(&[tx(-450.0, "Food and Drink")], &catalog);
        assert!(evaluate(&snap, &catalog).is_empty());
    }

    #[test]
    fn approaching_between_ninety_and_hundred_percent() {
        let catalog = CategoryCatalog::default_catalog();
        // 95% of the 500 limit
        let snap = snapshot_for(&[tx(-475.0, "Food and Drink")], &catalog);
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].approaching);
        assert!(warnings[0].message.contains("approaching"));
        assert!(warnings[0].message.contains("$25.00 remaining"));
    }

    #[test]
    fn spend_equal_to_limit_is_approaching_not_over() {
        let catalog = CategoryCatalog::default_catalog();
        let snap = snapshot_for(&[tx(-500.0, "Food and Drink")], &catalog);
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].approaching);
    }

    #[test]
    fn over_budget_message_reports_overage_and_percentage() {
        let catalog = CategoryCatalog::default_catalog();
        // 550 against a 500 limit: $50.00 over, 10% over
        let snap = snapshot_for(&[tx(-550.0, "Food and Drink")], &catalog);
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].approaching);
        assert!(
            warnings[0].message.contains("by $50.00 (10% over)"),
            "unexpected message: {}",
            warnings[0].message
        );
    }

    #[test]
    fn slightly_over_is_over_not_approaching() {
        let catalog = CategoryCatalog::default_catalog();
        // 101% of the limit
        let snap = snapshot_for(&[tx(-505.0, "Food and Drink")], &catalog);
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].approaching);
    }

    #[test]
    fn zero_limit_with_spend_is_over_with_zero_percentage() {
        let catalog = {
            let mut draft = CategoryCatalog::default_catalog().draft();
            draft.set_limit("Shopping", "0");
            draft.commit()
        };
        let snap = snapshot_for(&[tx(-30.0, "Shopping")], &catalog);
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].approaching);
        assert!(warnings[0].message.contains("(0% over)"));
    }

    #[test]
    fn warnings_follow_catalog_order() {
        let catalog = CategoryCatalog::default_catalog();
        let snap = snapshot_for(
            &[
                tx(-250.0, "Travel > Vacation"),  // Travel limit 200
                tx(-600.0, "Food and Drink"),     // Food and Drink limit 500
            ],
            &catalog,
        );
        let warnings = evaluate(&snap, &catalog);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].category, "Food and Drink");
        assert_eq!(warnings[1].category, "Travel");
    }
}
