//! Spendsight CLI - Budget tracking and spending insights
//!
//! Usage:
//!   spendsight import --file CSV        Import transactions
//!   spendsight add --name X --amount N  Record a single transaction
//!   spendsight budget                   Show spending against limits
//!   spendsight insights                 Spending pattern insights
//!   spendsight compare                  Month-over-month comparison

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store = commands::open_store(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Import { file, no_classify } => {
            commands::cmd_import(&store, &file, no_classify).await
        }
        Commands::Add {
            name,
            amount,
            date,
            category,
            no_classify,
        } => {
            commands::cmd_add(&store, &name, amount, date.as_deref(), &category, no_classify).await
        }
        Commands::Budget { month, year } => commands::cmd_budget(&store, month, year),
        Commands::Insights => commands::cmd_insights(&store),
        Commands::Compare { trend } => commands::cmd_compare(&store, trend),
        Commands::Categories => commands::cmd_categories(&store),
        Commands::SetLimit { category, limit } => {
            commands::cmd_set_limit(&store, &category, &limit)
        }
    }
}
