//! Tally CLI - Personal finance ledger
//!
//! Usage:
//!   tally register -u alice -p secret        Register a user
//!   tally add -u alice -p secret ...         Record a transaction
//!   tally report -u alice -p secret          Print the aggregate views
//!   tally shell                              Interactive menu

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn: the CLI
    // output itself is the user interface, keep the log channel quiet)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Register { login } => commands::cmd_register(&cli.users, &login),
        Commands::Add {
            login,
            description,
            amount,
            category,
            date,
        } => commands::cmd_add(
            &cli.finances,
            &cli.users,
            &login,
            &description,
            amount,
            &category,
            &date,
        ),
        Commands::List { login } => commands::cmd_list(&cli.finances, &cli.users, &login),
        Commands::Update {
            login,
            index,
            description,
            amount,
            category,
            date,
        } => commands::cmd_update(
            &cli.finances,
            &cli.users,
            &login,
            index,
            &description,
            amount,
            &category,
            &date,
        ),
        Commands::Delete { login, index } => {
            commands::cmd_delete(&cli.finances, &cli.users, &login, index)
        }
        Commands::Report { login } => commands::cmd_report(&cli.finances, &cli.users, &login),
        Commands::Shell => commands::cmd_shell(&cli.finances, &cli.users),
    }
}
