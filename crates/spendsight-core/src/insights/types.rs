//! Insight record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Something needs attention (overspend, large discretionary buy)
    Warning,
    /// Worth noticing but not alarming
    Info,
    /// Spending looks healthy
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// Display reference to the transaction an insight was generated for.
/// Carries no lasting identity; insights are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRef {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// A human-readable observation about spending behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    /// When this insight was generated
    pub timestamp: DateTime<Utc>,
    /// The transaction that triggered this insight, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionRef>,
}

impl Insight {
    pub fn new(kind: InsightKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            transaction: None,
        }
    }

    /// Attach the triggering transaction for display
    pub fn with_transaction(mut self, transaction: TransactionRef) -> Self {
        self.transaction = Some(transaction);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips() {
        assert_eq!(InsightKind::from_str("warning").unwrap(), InsightKind::Warning);
        assert_eq!(InsightKind::from_str("SUCCESS").unwrap(), InsightKind::Success);
        assert_eq!(InsightKind::Info.as_str(), "info");
        assert!(InsightKind::from_str("panic").is_err());
    }

    #[test]
    fn builder_attaches_transaction() {
        let insight = Insight::new(InsightKind::Info, "Title", "Message").with_transaction(
            TransactionRef {
                name: "Coffee".into(),
                amount: -4.5,
                category: "Food and Drink > Coffee Shop".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            },
        );
        assert_eq!(insight.transaction.unwrap().name, "Coffee");
    }
}
