//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `auth` - User registration
//! - `records` - Record CRUD commands (add, list, update, delete)
//! - `reports` - Report generation command
//! - `shell` - Interactive menu loop

pub mod auth;
pub mod records;
pub mod reports;
pub mod shell;

// Re-export command functions for main.rs
pub use auth::*;
pub use records::*;
pub use reports::*;
pub use shell::*;

use std::path::Path;

use anyhow::Result;
use tally_core::CredentialStore;

use crate::cli::Login;

/// Authenticate a login pair, failing the command on bad credentials
///
/// The core stores never check credentials; every record command goes
/// through this gate first.
pub(crate) fn require_login(users: &Path, login: &Login) -> Result<()> {
    let credentials = CredentialStore::new(users);
    if credentials.authenticate(&login.username, &login.password)? {
        Ok(())
    } else {
        anyhow::bail!("Invalid username or password")
    }
}

/// Truncate a string to max chars with ellipsis
///
/// Counts chars rather than bytes; descriptions and categories are
/// free-form text and a byte slice could land inside a multibyte char.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
