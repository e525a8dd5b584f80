//! Spending insight generation
//!
//! Two operation modes:
//! - `transaction_insight`: one typed insight for a newly recorded
//!   transaction, weighed against its month-to-date category total.
//! - `dashboard_insights`: independent pattern checks over the full
//!   history (discretionary share, small-purchase frequency, food
//!   share, weekend share).
//!
//! Insights are ephemeral: generated on demand, never persisted.
//! Display scheduling (auto-dismiss timers, stagger) belongs to the
//! presentation layer.

mod dashboard;
mod transaction;
pub mod types;

pub use dashboard::dashboard_insights;
pub use transaction::transaction_insight;
pub use types::{Insight, InsightKind, TransactionRef};
