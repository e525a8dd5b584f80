//! Dashboard insight command

use anyhow::Result;
use chrono::Local;
use spendsight_core::{dashboard_insights, InsightKind, Store};

pub fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "⚠️ ",
        InsightKind::Info => "💡",
        InsightKind::Success => "✅",
    }
}

pub fn cmd_insights(store: &Store) -> Result<()> {
    let transactions = store.load_transactions()?;
    let catalog = store.load_catalog()?;

    if transactions.is_empty() {
        println!("No transactions yet. Import a CSV or record one with `spendsight add`.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let insights = dashboard_insights(&transactions, &catalog, today);

    println!("💭 Spending Insights");
    println!();
    for insight in insights {
        println!("{} {}", insight_icon(insight.kind), insight.title);
        println!("   {}", insight.message);
        println!();
    }
    Ok(())
}
