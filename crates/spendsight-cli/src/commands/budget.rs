//! Budget status, category listing, and limit editing commands

use anyhow::Result;
use chrono::{Datelike, Local};
use spendsight_core::{aggregate, evaluate, Store};

use super::truncate;

pub fn cmd_budget(store: &Store, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let today = Local::now().date_naive();
    let month = month.unwrap_or_else(|| today.month());
    let year = year.unwrap_or_else(|| today.year());
    anyhow::ensure!((1..=12).contains(&month), "Month must be 1-12, got {}", month);

    let transactions = store.load_transactions()?;
    let catalog = store.load_catalog()?;
    let snapshot = aggregate(&transactions, month, year, &catalog);

    println!("📊 Budget for {:02}/{}", month, year);
    println!();
    println!("{:<20} {:>10} {:>10} {:>10}", "Category", "Spent", "Limit", "Left");
    println!("{}", "-".repeat(53));
    for cat in catalog.iter() {
        let spent = snapshot.spend(&cat.name);
        println!(
            "{:<20} {:>10.2} {:>10.2} {:>10.2}",
            truncate(&cat.name, 20),
            spent,
            cat.limit,
            cat.limit - spent
        );
    }
    println!("{}", "-".repeat(53));
    println!("{:<20} {:>10.2}", "Total", snapshot.total());

    let warnings = evaluate(&snapshot, &catalog);
    if !warnings.is_empty() {
        println!();
        for warning in warnings {
            let icon = if warning.approaching { "⚠️ " } else { "🚨" };
            println!("{} {}", icon, warning.message);
        }
    }
    Ok(())
}

pub fn cmd_categories(store: &Store) -> Result<()> {
    let catalog = store.load_catalog()?;

    println!("🏷️  Budget Categories");
    println!();
    println!("{:<20} {:>10}  {:<9} Keywords", "Category", "Limit", "Color");
    println!("{}", "-".repeat(70));
    for cat in catalog.iter() {
        println!(
            "{:<20} {:>10.2}  {:<9} {}",
            truncate(&cat.name, 20),
            cat.limit,
            cat.color,
            truncate(&cat.terms.join(", "), 28)
        );
    }
    Ok(())
}

pub fn cmd_set_limit(store: &Store, category: &str, limit: &str) -> Result<()> {
    let catalog = store.load_catalog()?;
    anyhow::ensure!(
        catalog.contains(category),
        "Unknown category: {} (see `spendsight categories`)",
        category
    );

    let mut draft = catalog.draft();
    draft.set_limit(category, limit);
    let catalog = draft.commit();
    store.save_catalog(&catalog)?;

    let new_limit = catalog.get(category).map(|c| c.limit).unwrap_or(0.0);
    let wanted = limit.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0);
    if wanted.is_some() || new_limit > 0.0 {
        println!("✅ {} limit set to ${:.2}", category, new_limit);
    } else {
        println!("⚠️  \"{}\" is not a positive number; {} limit cleared to $0.00", limit, category);
    }
    Ok(())
}
