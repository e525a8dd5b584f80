//! Spendsight Core Library
//!
//! Shared functionality for the Spendsight budget tool:
//! - Transaction and budget category models
//! - Keyword-based category matching
//! - Monthly per-category spending aggregation
//! - Budget limit monitoring with overage warnings
//! - Per-transaction and dashboard spending insights
//! - Month-over-month comparison and trend series
//! - CSV import with content-hash deduplication
//! - Remote need/want classification backends
//! - Local JSON persistence

pub mod aggregate;
pub mod catalog;
pub mod categorize;
pub mod classify;
pub mod compare;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;
pub mod monitor;
pub mod store;

pub use aggregate::{aggregate, CategorySpendingSnapshot};
pub use catalog::{BudgetCategory, CatalogDraft, CategoryCatalog, OTHER_CATEGORY};
pub use categorize::categorize;
pub use classify::{
    classify_batch, ClassificationOutcome, ClassifierBackend, HttpClassifier, MockClassifier,
};
pub use compare::{compare_months, trend_series, MonthKey, MonthlyComparisonEntry};
pub use error::{Error, Result};
pub use insights::{dashboard_insights, transaction_insight, Insight, InsightKind, TransactionRef};
pub use models::{Classification, RawTransaction, Transaction, CATEGORY_DELIMITER};
pub use monitor::{evaluate, Warning};
pub use store::Store;
