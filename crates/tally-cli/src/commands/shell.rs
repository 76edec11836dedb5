//! Interactive menu shell
//!
//! A thin command interpreter over the core stores: register/login once,
//! then a numbered menu (add / delete / update / report / exit). Indices
//! shown by the report and listing are 0-based and shift on delete.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tally_core::{CredentialStore, Error, FinanceRecord, RecordStore};

use super::reports::print_report;

pub fn cmd_shell(finances: &Path, users: &Path) -> Result<()> {
    let stdin = std::io::stdin();
    run_shell(finances, users, stdin.lock())
}

/// The shell proper, generic over its input so tests can script it
pub(crate) fn run_shell<R: BufRead>(finances: &Path, users: &Path, mut input: R) -> Result<()> {
    let credentials = CredentialStore::new(users);
    let store = RecordStore::new(finances);

    let Some(username) = prompt(&mut input, "Enter username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(&mut input, "Enter password: ")? else {
        return Ok(());
    };

    // Same flow as the original: try to register, then log in either way
    if credentials
        .register(&username, &password)
        .context("Failed to register user")?
    {
        println!("Registration successful.");
    } else {
        println!("User already exists.");
    }

    if !credentials
        .authenticate(&username, &password)
        .context("Failed to read credentials")?
    {
        println!("Invalid username or password.");
        return Ok(());
    }
    println!("Login successful.");

    loop {
        println!();
        println!("1. Add record");
        println!("2. Delete record");
        println!("3. Update record");
        println!("4. Generate report");
        println!("5. Exit");

        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if let Some(record) = read_record(&mut input)? {
                    let index = store
                        .add(&username, record)
                        .context("Failed to add record")?;
                    println!("Added record {}.", index);
                }
            }
            "2" => {
                let Some(index) = read_index(&mut input, "Enter record index to delete: ")? else {
                    continue;
                };
                match store.delete(&username, index) {
                    Ok(_) => println!("Deleted record {}.", index),
                    Err(Error::IndexOutOfRange { .. }) => println!("Invalid record index."),
                    Err(e) => return Err(e).context("Failed to delete record"),
                }
            }
            "3" => {
                let Some(index) = read_index(&mut input, "Enter record index to update: ")? else {
                    continue;
                };
                if let Some(record) = read_record(&mut input)? {
                    match store.update(&username, index, record) {
                        Ok(()) => println!("Updated record {}.", index),
                        Err(Error::IndexOutOfRange { .. }) => println!("Invalid record index."),
                        Err(e) => return Err(e).context("Failed to update record"),
                    }
                }
            }
            "4" => {
                let records = store.load(&username).context("Failed to load records")?;
                print_report(&username, &records);
            }
            "5" => break,
            other => println!("Unknown option: {}", other),
        }
    }

    Ok(())
}

/// Prompt for one line; `None` means end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    use std::io::Write;
    print!("{}", label);
    std::io::stdout().flush().ok();

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for the four record fields; invalid input aborts this entry
/// without leaving the menu
fn read_record<R: BufRead>(input: &mut R) -> Result<Option<FinanceRecord>> {
    let Some(description) = prompt(input, "Enter description: ")? else {
        return Ok(None);
    };
    let Some(amount) = prompt(input, "Enter amount: ")? else {
        return Ok(None);
    };
    let amount: Decimal = match amount.parse() {
        Ok(amount) => amount,
        Err(_) => {
            println!("Invalid amount: {}", amount);
            return Ok(None);
        }
    };
    let Some(category) = prompt(input, "Enter category: ")? else {
        return Ok(None);
    };
    let Some(date) = prompt(input, "Enter date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };

    match FinanceRecord::new(description, amount, category, &date) {
        Ok(record) => Ok(Some(record)),
        Err(Error::DateFormat { value, .. }) => {
            println!("Invalid date: {} (use YYYY-MM-DD)", value);
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to build record"),
    }
}

fn read_index<R: BufRead>(input: &mut R, label: &str) -> Result<Option<usize>> {
    let Some(raw) = prompt(input, label)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(index) => Ok(Some(index)),
        Err(_) => {
            println!("Invalid record index.");
            Ok(None)
        }
    }
}
