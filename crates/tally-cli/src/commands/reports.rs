//! Report generation command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{
    monthly_totals, percent_by_category, totals_by_category, FinanceRecord, PercentBreakdown,
    RecordStore,
};

use super::require_login;
use crate::cli::Login;

pub fn cmd_report(finances: &Path, users: &Path, login: &Login) -> Result<()> {
    require_login(users, login)?;

    let records = RecordStore::new(finances)
        .load(&login.username)
        .context("Failed to load records")?;

    print_report(&login.username, &records);
    Ok(())
}

/// Print the three aggregate views; shared with the interactive shell
pub(crate) fn print_report(username: &str, records: &[FinanceRecord]) {
    println!();
    println!("📊 Finance Report for {}", username);
    println!("   ─────────────────────────────────────────────────────────────");

    let Some(totals) = totals_by_category(records) else {
        println!("   No records available for this user.");
        return;
    };

    println!("   Total income and expenses by category:");
    for (category, total) in &totals {
        println!("     {:<20} {:>12}", category, total);
    }

    println!();
    println!("   Spending distribution by category:");
    match percent_by_category(records) {
        PercentBreakdown::PerCategory(percentages) => {
            for (category, percent) in &percentages {
                println!("     {:<20} {:>9.2}%", category, percent);
            }
        }
        PercentBreakdown::NotComputable => {
            println!("     Not computable: amounts sum to zero.");
        }
        PercentBreakdown::NoData => unreachable!("empty input returned earlier"),
    }

    println!();
    println!("   Monthly trends:");
    if let Some(months) = monthly_totals(records) {
        for (month, total) in &months {
            println!("     {:<20} {:>12}", month.to_string(), total);
        }
    }
}
