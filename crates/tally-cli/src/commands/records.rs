//! Record CRUD command implementations

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tally_core::{Error, FinanceRecord, RecordStore};

use super::{require_login, truncate};
use crate::cli::Login;

#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    finances: &Path,
    users: &Path,
    login: &Login,
    description: &str,
    amount: Decimal,
    category: &str,
    date: &str,
) -> Result<()> {
    require_login(users, login)?;

    let record = FinanceRecord::new(description, amount, category, date)
        .context("Invalid record (dates are YYYY-MM-DD)")?;
    let store = RecordStore::new(finances);
    let index = store
        .add(&login.username, record)
        .context("Failed to add record")?;

    println!("✅ Added record {} for {}", index, login.username);
    Ok(())
}

pub fn cmd_list(finances: &Path, users: &Path, login: &Login) -> Result<()> {
    require_login(users, login)?;

    let records = RecordStore::new(finances)
        .load(&login.username)
        .context("Failed to load records")?;

    if records.is_empty() {
        println!("No records available for this user.");
        return Ok(());
    }

    println!();
    println!("📒 Records for {}", login.username);
    println!("   ─────────────────────────────────────────────────────────────");
    for (index, record) in records.iter().enumerate() {
        println!(
            "   [{:>3}] {}  {:>12}  {:<16} {}",
            index,
            record.date,
            record.amount,
            truncate(&record.category, 16),
            truncate(&record.description, 40)
        );
    }
    println!("   {} record(s)", records.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_update(
    finances: &Path,
    users: &Path,
    login: &Login,
    index: usize,
    description: &str,
    amount: Decimal,
    category: &str,
    date: &str,
) -> Result<()> {
    require_login(users, login)?;

    let record = FinanceRecord::new(description, amount, category, date)
        .context("Invalid record (dates are YYYY-MM-DD)")?;
    match RecordStore::new(finances).update(&login.username, index, record) {
        Ok(()) => {
            println!("✅ Updated record {} for {}", index, login.username);
            Ok(())
        }
        // Rejected, not fatal: nothing changed on disk
        Err(Error::IndexOutOfRange { index, len }) => {
            println!("❌ Invalid record index {} ({} record(s) on file)", index, len);
            Ok(())
        }
        Err(e) => Err(e).context("Failed to update record"),
    }
}

pub fn cmd_delete(finances: &Path, users: &Path, login: &Login, index: usize) -> Result<()> {
    require_login(users, login)?;

    match RecordStore::new(finances).delete(&login.username, index) {
        Ok(removed) => {
            println!(
                "✅ Deleted record {} ({}). Later records shifted down by one.",
                index,
                truncate(&removed.description, 40)
            );
            Ok(())
        }
        Err(Error::IndexOutOfRange { index, len }) => {
            println!("❌ Invalid record index {} ({} record(s) on file)", index, len);
            Ok(())
        }
        Err(e) => Err(e).context("Failed to delete record"),
    }
}
