//! Credential store with a pluggable password scheme
//!
//! The backing document mirrors the record store: one JSON object keyed by
//! username, each value holding the stored password. The default scheme is
//! plaintext for compatibility with pre-existing `users.json` files — a
//! known weakness, isolated behind [`PasswordScheme`] so a hashing scheme
//! can be substituted without touching the stores or the wire format of
//! anything else.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::store::{read_document, write_document};

/// How passwords are turned into stored values and checked against them
pub trait PasswordScheme: Send + Sync {
    /// Transform a raw password into its stored representation
    fn protect(&self, raw: &str) -> String;

    /// Check a raw password against a stored representation
    fn verify(&self, raw: &str, stored: &str) -> bool;
}

/// Stores passwords verbatim. Compatible with existing data files;
/// do not use where the credential document needs real protection.
pub struct Plaintext;

impl PasswordScheme for Plaintext {
    fn protect(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn verify(&self, raw: &str, stored: &str) -> bool {
        raw == stored
    }
}

/// One user's entry in the credential document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CredentialEntry {
    password: String,
}

type CredentialDoc = BTreeMap<String, CredentialEntry>;

/// Persisted username -> credential mapping
///
/// Registration and authentication only; gating record access on a
/// successful login is the caller's job.
pub struct CredentialStore {
    path: PathBuf,
    scheme: Box<dyn PasswordScheme>,
}

impl CredentialStore {
    /// Open a credential store with the plaintext scheme
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_scheme(path, Box::new(Plaintext))
    }

    pub fn with_scheme(path: impl Into<PathBuf>, scheme: Box<dyn PasswordScheme>) -> Self {
        Self {
            path: path.into(),
            scheme,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a new user
    ///
    /// Returns `Ok(false)` if the username already exists; the stored
    /// password is left untouched in that case.
    pub fn register(&self, username: &str, password: &str) -> Result<bool> {
        let mut users: CredentialDoc = read_document(&self.path)?;
        if users.contains_key(username) {
            return Ok(false);
        }

        users.insert(
            username.to_string(),
            CredentialEntry {
                password: self.scheme.protect(password),
            },
        );
        write_document(&self.path, &users)?;
        info!("Registered user {}", username);
        Ok(true)
    }

    /// Check a username/password pair; unknown users simply fail
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let users: CredentialDoc = read_document(&self.path)?;
        Ok(users
            .get(username)
            .is_some_and(|entry| self.scheme.verify(password, &entry.password)))
    }
}
