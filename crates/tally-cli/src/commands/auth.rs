//! User registration command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::CredentialStore;

use crate::cli::Login;

pub fn cmd_register(users: &Path, login: &Login) -> Result<()> {
    let credentials = CredentialStore::new(users);
    let created = credentials
        .register(&login.username, &login.password)
        .context("Failed to register user")?;

    if created {
        println!("✅ Registered user {}", login.username);
    } else {
        println!("❌ User {} already exists", login.username);
    }
    Ok(())
}
