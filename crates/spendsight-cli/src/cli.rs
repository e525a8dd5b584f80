//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendsight - Budget tracking and spending insights
#[derive(Parser)]
#[command(name = "spendsight")]
#[command(about = "Track spending against budget categories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir, or
    /// $SPENDSIGHT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import transactions from CSV
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Skip remote need/want classification
        #[arg(long)]
        no_classify: bool,
    },

    /// Record a single transaction
    Add {
        /// Merchant or description
        #[arg(short, long)]
        name: String,

        /// Amount (negative for spending)
        #[arg(short, long)]
        amount: f64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Category path, e.g. "Food and Drink > Groceries"
        #[arg(short, long, default_value = "")]
        category: String,

        /// Skip remote need/want classification
        #[arg(long)]
        no_classify: bool,
    },

    /// Show monthly spending against budget limits
    Budget {
        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Generate spending pattern insights
    Insights,

    /// Compare spending across months
    Compare {
        /// Show the chronological trend series instead of the
        /// most-recent-first comparison
        #[arg(long)]
        trend: bool,
    },

    /// List budget categories and limits
    Categories,

    /// Set a category's monthly budget limit
    SetLimit {
        /// Category name, e.g. "Food and Drink"
        category: String,

        /// New monthly limit (invalid or negative input clears it to 0)
        limit: String,
    },
}
