//! Month-over-month comparison commands

use anyhow::Result;
use spendsight_core::{compare_months, trend_series, MonthlyComparisonEntry, Store};

fn print_entry(entry: &MonthlyComparisonEntry) {
    println!(
        "{:<16} {:>10.2}  ({} transactions)",
        entry.label, entry.total_spending, entry.transaction_count
    );
    let mut by_category: Vec<(&String, &f64)> = entry.per_category_spending.iter().collect();
    by_category.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (category, amount) in by_category {
        println!("    {:<20} {:>10.2}", category, amount);
    }
}

pub fn cmd_compare(store: &Store, trend: bool) -> Result<()> {
    let transactions = store.load_transactions()?;
    let catalog = store.load_catalog()?;

    if trend {
        let series = trend_series(&transactions, &catalog);
        if series.is_empty() {
            println!("No transactions yet.");
            return Ok(());
        }
        println!("📈 Spending Trend (oldest first)");
        println!();
        for entry in &series {
            println!("{:<16} {:>10.2}", entry.label, entry.total_spending);
        }
        return Ok(());
    }

    let entries = compare_months(&transactions, &catalog);
    if entries.is_empty() {
        println!("Need at least two months of transactions to compare.");
        return Ok(());
    }

    println!("📊 Monthly Comparison (most recent first)");
    println!();
    for entry in &entries {
        print_entry(entry);
        println!();
    }
    Ok(())
}
