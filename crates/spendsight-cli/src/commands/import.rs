//! Import and single-transaction recording commands

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use spendsight_core::import::{dedup, parse_csv};
use spendsight_core::{
    aggregate, classify_batch, evaluate, transaction_insight, ClassifierBackend, MockClassifier,
    RawTransaction, Store,
};

use super::classifier;

pub async fn cmd_import(store: &Store, file: &Path, no_classify: bool) -> Result<()> {
    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;

    println!("📥 Importing from {}...", file.display());

    let raw = parse_csv(csv_file)?;
    let parsed = raw.len();
    println!("   Found {} transactions", parsed);

    let mut transactions = store.load_transactions()?;
    let fresh = dedup(raw, &transactions);
    let skipped = parsed - fresh.len();

    let backend: Box<dyn ClassifierBackend> = if no_classify {
        Box::new(MockClassifier)
    } else {
        classifier()
    };
    let classified = classify_batch(backend.as_ref(), fresh).await;
    let imported = classified.len();

    transactions.extend(classified);
    store.save_transactions(&transactions)?;

    println!("✅ Import complete!");
    println!("   Imported: {}", imported);
    println!("   Skipped (duplicates): {}", skipped);

    print_current_month_warnings(store, &transactions)?;
    Ok(())
}

pub async fn cmd_add(
    store: &Store,
    name: &str,
    amount: f64,
    date: Option<&str>,
    category: &str,
    no_classify: bool,
) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?,
        None => Local::now().date_naive(),
    };

    let raw = RawTransaction {
        name: name.to_string(),
        amount,
        date,
        category: category.to_string(),
    };

    let backend: Box<dyn ClassifierBackend> = if no_classify {
        Box::new(MockClassifier)
    } else {
        classifier()
    };
    let tx = classify_batch(backend.as_ref(), vec![raw]).await.remove(0);

    let mut transactions = store.load_transactions()?;
    if transactions.iter().any(|t| t.dedup_key() == tx.dedup_key()) {
        println!("⏭️  Already recorded: {} ${:.2} on {}", name, amount.abs(), date);
        return Ok(());
    }

    let insight = transaction_insight(&tx, &transactions);
    transactions.push(tx);
    store.save_transactions(&transactions)?;

    println!("✅ Recorded {} ${:.2} on {}", name, amount.abs(), date);
    println!();
    println!("{} {}", super::insight_icon(insight.kind), insight.title);
    println!("   {}", insight.message);

    print_current_month_warnings(store, &transactions)?;
    Ok(())
}

/// Print budget warnings for the current calendar month, if any
fn print_current_month_warnings(
    store: &Store,
    transactions: &[spendsight_core::Transaction],
) -> Result<()> {
    let catalog = store.load_catalog()?;
    let today = Local::now().date_naive();
    let snapshot = aggregate(transactions, today.month(), today.year(), &catalog);
    let warnings = evaluate(&snapshot, &catalog);
    if warnings.is_empty() {
        return Ok(());
    }

    println!();
    for warning in warnings {
        let icon = if warning.approaching { "⚠️ " } else { "🚨" };
        println!("{} {}", icon, warning.message);
    }
    Ok(())
}
