//! Budget category catalog
//!
//! The catalog is the single source of truth for budget buckets: an
//! ordered set of categories, each with a monthly limit and a list of
//! matching terms. Every other core component reads it in full on each
//! call; edits go through a staged draft and are committed atomically.

use serde::{Deserialize, Serialize};

/// Name of the mandatory fallback category
pub const OTHER_CATEGORY: &str = "Other";

/// A budget category with its monthly spending limit and matching terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique display name, e.g. "Food and Drink"
    pub name: String,
    /// Monthly spending ceiling (non-negative)
    pub limit: f64,
    /// Presentation-only hex color
    pub color: String,
    /// Lowercase keywords matched against transaction category/name
    pub terms: Vec<String>,
}

impl BudgetCategory {
    fn new(name: &str, limit: f64, color: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            limit,
            color: color.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The ordered set of budget categories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CatalogRecord")]
pub struct CategoryCatalog {
    categories: Vec<BudgetCategory>,
}

/// Raw serialized form of the catalog. Deserialization converts
/// through `CategoryCatalog::new` so the name-uniqueness and "Other"
/// fallback invariants also hold for catalogs loaded from disk.
#[derive(Deserialize)]
struct CatalogRecord {
    categories: Vec<BudgetCategory>,
}

impl From<CatalogRecord> for CategoryCatalog {
    fn from(record: CatalogRecord) -> Self {
        Self::new(record.categories)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl CategoryCatalog {
    /// Build a catalog from an explicit category list. Duplicate names
    /// keep the first occurrence; an "Other" entry is appended if
    /// missing so categorization always has a fallback.
    pub fn new(categories: Vec<BudgetCategory>) -> Self {
        let mut seen = Vec::new();
        let mut deduped = Vec::new();
        for cat in categories {
            if seen.contains(&cat.name) {
                tracing::warn!(category = %cat.name, "Duplicate category name dropped");
                continue;
            }
            seen.push(cat.name.clone());
            deduped.push(cat);
        }
        if !seen.iter().any(|n| n == OTHER_CATEGORY) {
            deduped.push(BudgetCategory::new(
                OTHER_CATEGORY,
                250.0,
                "#607D8B",
                &["other", "miscellaneous", "misc", "general", "cash", "withdrawal", "atm", "unknown", "uncategorized"],
            ));
        }
        Self { categories: deduped }
    }

    /// The 12 default budget categories with their terms and limits
    pub fn default_catalog() -> Self {
        Self {
            categories: vec![
                BudgetCategory::new("Food and Drink", 500.0, "#4CAF50", &[
                    "food", "drink", "groceries", "restaurant", "cafe", "coffee", "dining",
                    "takeout", "delivery", "doordash", "grubhub", "ubereats", "fast food",
                    "alcohol", "bar", "brewery", "liquor",
                ]),
                BudgetCategory::new("Housing", 1200.0, "#2196F3", &[
                    "housing", "rent", "mortgage", "utilities", "electric", "water", "gas",
                    "internet", "home", "apartment", "property", "hoa", "landlord", "lease",
                    "residence", "real estate",
                ]),
                BudgetCategory::new("Transportation", 300.0, "#FF9800", &[
                    "transportation", "gas", "fuel", "petrol", "bus", "train", "transit",
                    "auto", "car", "uber", "lyft", "taxi", "subway", "metro", "commute",
                    "parking", "toll",
                ]),
                BudgetCategory::new("Shopping", 200.0, "#9C27B0", &[
                    "shopping", "merchandise", "retail", "clothing", "electronics", "amazon",
                    "walmart", "target", "apparel", "shoes", "accessory", "gadget", "ebay",
                    "etsy", "mall", "boutique", "jewelry", "gifts",
                ]),
                BudgetCategory::new("Entertainment", 150.0, "#F44336", &[
                    "entertainment", "movie", "theater", "game", "music", "concert",
                    "subscription", "netflix", "hulu", "disney+", "spotify", "streaming",
                    "cinema", "show", "ticket", "event", "festival", "amusement", "museum",
                    "zoo",
                ]),
                BudgetCategory::new("Healthcare", 100.0, "#00BCD4", &[
                    "healthcare", "medical", "doctor", "pharmacy", "hospital", "dental",
                    "health", "fitness", "medicine", "prescription", "clinic", "urgent care",
                    "emergency", "insurance", "vision", "therapy", "specialist",
                ]),
                BudgetCategory::new("Education", 150.0, "#3F51B5", &[
                    "education", "tuition", "school", "university", "college", "student",
                    "book", "textbook", "class", "course", "academic", "educational",
                    "learning", "study", "degree", "training",
                ]),
                BudgetCategory::new("Personal Care", 100.0, "#E91E63", &[
                    "beauty", "spa", "salon", "cosmetics", "haircut", "manicure", "pedicure",
                    "massage", "facial", "makeup", "skincare", "perfume", "cologne",
                    "grooming", "barbershop", "personal care",
                ]),
                BudgetCategory::new("Travel", 200.0, "#009688", &[
                    "travel", "hotel", "vacation", "trip", "flight", "airline", "resort",
                    "cruise", "airbnb", "booking", "tourism", "tour", "sightseeing",
                    "souvenir", "holiday", "rental car", "airfare", "luggage",
                ]),
                BudgetCategory::new("Recreation", 150.0, "#673AB7", &[
                    "recreation", "hobby", "gym", "fitness", "sport", "golf", "yoga",
                    "workout", "outdoor", "camping", "fishing", "hiking", "craft", "art",
                    "leisure", "athletic", "exercise", "cycling", "running",
                ]),
                BudgetCategory::new("Bills & Services", 300.0, "#795548", &[
                    "bill", "service", "subscription", "insurance", "phone", "mobile",
                    "internet", "cable", "wifi", "broadband", "fiber", "security",
                    "cloud storage", "software", "utility", "payment",
                ]),
                BudgetCategory::new("Other", 250.0, "#607D8B", &[
                    "other", "miscellaneous", "misc", "general", "cash", "withdrawal", "atm",
                    "unknown", "uncategorized",
                ]),
            ],
        }
    }

    /// Categories in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &BudgetCategory> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by exact name
    pub fn get(&self, name: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Start an edit session on a copy of this catalog
    pub fn draft(&self) -> CatalogDraft {
        CatalogDraft {
            categories: self.categories.clone(),
        }
    }
}

/// A staged, mutable copy of the catalog. Edits accumulate here and
/// only take effect when `commit` replaces the live catalog wholesale.
#[derive(Debug, Clone)]
pub struct CatalogDraft {
    categories: Vec<BudgetCategory>,
}

impl CatalogDraft {
    /// Set a category's monthly limit from user input. Anything that
    /// does not parse as a number, and any negative value, coerces to 0.
    pub fn set_limit(&mut self, name: &str, input: &str) -> bool {
        let limit = input.trim().parse::<f64>().unwrap_or(0.0);
        let limit = if limit.is_finite() && limit > 0.0 { limit } else { 0.0 };
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(cat) => {
                cat.limit = limit;
                true
            }
            None => false,
        }
    }

    /// Commit the draft, producing the new catalog
    pub fn commit(self) -> CategoryCatalog {
        CategoryCatalog::new(self.categories)
    }
}
