//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Tally - Single-user personal finance ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record dated transactions and report on them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Finance records document
    #[arg(long, default_value = "finances.json", global = true)]
    pub finances: PathBuf,

    /// User credentials document
    #[arg(long, default_value = "users.json", global = true)]
    pub users: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Username/password pair gating every record command
///
/// The core stores do not check credentials themselves; the CLI is the
/// caller responsible for gating access.
#[derive(Args)]
pub struct Login {
    /// Username
    #[arg(short, long)]
    pub username: String,

    /// Password
    #[arg(short, long)]
    pub password: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    Register {
        #[command(flatten)]
        login: Login,
    },

    /// Add a record
    Add {
        #[command(flatten)]
        login: Login,

        /// What the money was for
        #[arg(short, long)]
        description: String,

        /// Signed amount (positive = income, negative = expense)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,

        /// Category label used for report grouping
        #[arg(short, long)]
        category: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// List records with their indices
    List {
        #[command(flatten)]
        login: Login,
    },

    /// Replace the record at an index
    ///
    /// Indices are 0-based and shift when earlier records are deleted;
    /// list first to get current positions.
    Update {
        #[command(flatten)]
        login: Login,

        /// 0-based record index
        #[arg(short, long)]
        index: usize,

        /// New description
        #[arg(short, long)]
        description: String,

        /// New signed amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,

        /// New category
        #[arg(short, long)]
        category: String,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Delete the record at an index
    Delete {
        #[command(flatten)]
        login: Login,

        /// 0-based record index
        #[arg(short, long)]
        index: usize,
    },

    /// Print the three aggregate views (totals, distribution, monthly)
    Report {
        #[command(flatten)]
        login: Login,
    },

    /// Interactive menu (register/login, then add/delete/update/report)
    Shell,
}
