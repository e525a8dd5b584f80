//! Domain models for Spendsight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Delimiter between segments of a hierarchical category string
/// (e.g. "Food and Drink > Groceries").
pub const CATEGORY_DELIMITER: &str = " > ";

/// Need/want classification supplied by the remote classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Essential spending
    Need,
    /// Discretionary spending
    Want,
    /// Not yet classified (or classifier unavailable)
    #[default]
    Uncategorized,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Want => "want",
            Self::Uncategorized => "uncategorized",
        }
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "need" => Ok(Self::Need),
            "want" => Ok(Self::Want),
            "uncategorized" | "unknown" | "" => Ok(Self::Uncategorized),
            _ => Err(format!("Unknown classification: {}", s)),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-text merchant or payee name
    pub name: String,
    /// Signed amount; the sign does not convey need/want, spend totals
    /// always use the absolute value
    pub amount: f64,
    /// Calendar date (day precision)
    pub date: NaiveDate,
    /// Hierarchical category string ("Main > Sub"), may be a single
    /// segment or empty
    #[serde(default)]
    pub category: String,
    /// Need/want label from the remote classifier
    #[serde(default)]
    pub classification: Classification,
    /// Classifier confidence, 0-100, advisory only
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    50.0
}

impl Transaction {
    /// The portion of the category string before the first " > "
    /// delimiter. Empty categories yield an empty string.
    pub fn main_category(&self) -> &str {
        self.category
            .split(CATEGORY_DELIMITER)
            .next()
            .unwrap_or("")
    }

    /// Key identifying this transaction for dedup and self-exclusion:
    /// sha256 over (name, amount, date).
    pub fn dedup_key(&self) -> String {
        dedup_key(&self.name, self.amount, &self.date)
    }
}

/// Compute the dedup key for a (name, amount, date) triple
pub fn dedup_key(name: &str, amount: f64, date: &NaiveDate) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(amount.to_be_bytes());
    hasher.update(date.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// An unclassified transaction as parsed from CSV or entered manually,
/// before the classifier has seen it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
}

impl RawTransaction {
    /// Attach a classification result, producing a full transaction
    pub fn into_transaction(self, classification: Classification, confidence: f64) -> Transaction {
        Transaction {
            name: self.name,
            amount: self.amount,
            date: self.date,
            category: self.category,
            classification,
            confidence,
        }
    }

    pub fn dedup_key(&self) -> String {
        dedup_key(&self.name, self.amount, &self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tx(name: &str, amount: f64, date: &str, category: &str) -> Transaction {
        Transaction {
            name: name.into(),
            amount,
            date: NaiveDate::from_str(date).unwrap(),
            category: category.into(),
            classification: Classification::Uncategorized,
            confidence: 50.0,
        }
    }

    #[test]
    fn main_category_strips_subcategory() {
        let t = tx("Whole Foods", -60.0, "2024-03-05", "Food and Drink > Groceries");
        assert_eq!(t.main_category(), "Food and Drink");
    }

    #[test]
    fn main_category_single_segment() {
        let t = tx("Rent", -1200.0, "2024-03-01", "Housing");
        assert_eq!(t.main_category(), "Housing");
    }

    #[test]
    fn main_category_empty_is_empty() {
        let t = tx("Mystery", -5.0, "2024-03-01", "");
        assert_eq!(t.main_category(), "");
    }

    #[test]
    fn dedup_key_is_stable_and_distinguishes() {
        let a = tx("Coffee", -4.5, "2024-03-05", "");
        let b = tx("Coffee", -4.5, "2024-03-05", "Food and Drink");
        let c = tx("Coffee", -4.5, "2024-03-06", "");
        // Category does not participate in the key
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn classification_round_trip() {
        assert_eq!(Classification::from_str("want").unwrap(), Classification::Want);
        assert_eq!(Classification::from_str("NEED").unwrap(), Classification::Need);
        assert_eq!(
            Classification::from_str("").unwrap(),
            Classification::Uncategorized
        );
        assert_eq!(Classification::Want.as_str(), "want");
    }

    #[test]
    fn transaction_deserializes_with_missing_optional_fields() {
        let json = r#"{"name":"Coffee","amount":-4.5,"date":"2024-03-05"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.category, "");
        assert_eq!(t.classification, Classification::Uncategorized);
        assert_eq!(t.confidence, 50.0);
    }
}
