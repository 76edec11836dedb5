//! Record store: per-user finance collections in one shared JSON document
//!
//! The backing document is a single JSON object whose top-level keys are
//! usernames and whose values are ordered arrays of records. Every mutation
//! re-reads the whole document, splices in the active user's collection and
//! rewrites the document atomically, so other users' data survives every
//! write path including first-time file creation.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::FinanceRecord;

/// The full persisted mapping of usernames to their record collections
pub(crate) type UserStore = BTreeMap<String, Vec<FinanceRecord>>;

/// Read a whole JSON document, treating a missing file as the empty value
///
/// A file that exists but does not parse is a corrupt document, surfaced
/// as an error with no recovery attempted.
pub(crate) fn read_document<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Document not found, starting empty: {}", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| Error::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a whole JSON document via temp-file-then-rename
///
/// The temp file lives in the document's directory so the rename stays on
/// one filesystem. On any failure the prior document is left untouched.
pub(crate) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        .map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let write = |json: &[u8]| -> std::io::Result<()> {
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
            None => tempfile::NamedTempFile::new_in(".")?,
        };
        tmp.write_all(json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    };

    write(&json).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Durable CRUD over one user's record collection
///
/// The store is scoped to an explicit document path; there is no ambient
/// global file. Concurrency is out of scope: one writer per process is
/// assumed, and the atomic replace only guarantees readers never observe
/// a torn document.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load one user's collection; absent file or unknown user is empty
    pub fn load(&self, username: &str) -> Result<Vec<FinanceRecord>> {
        let mut store: UserStore = read_document(&self.path)?;
        Ok(store.remove(username).unwrap_or_default())
    }

    /// Append a record to the user's collection, returning its index
    pub fn add(&self, username: &str, record: FinanceRecord) -> Result<usize> {
        let mut store: UserStore = read_document(&self.path)?;
        let records = store.entry(username.to_string()).or_default();
        records.push(record);
        let index = records.len() - 1;

        write_document(&self.path, &store)?;
        info!("Added record {} for {}", index, username);
        Ok(index)
    }

    /// Replace the record at `index` wholesale
    ///
    /// An out-of-range index rejects the operation with no state change.
    pub fn update(&self, username: &str, index: usize, record: FinanceRecord) -> Result<()> {
        let mut store: UserStore = read_document(&self.path)?;
        let records = store.entry(username.to_string()).or_default();
        let len = records.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        records[index] = record;

        write_document(&self.path, &store)?;
        info!("Updated record {} for {}", index, username);
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down by one
    ///
    /// Positional indices are not stable identifiers: callers must re-fetch
    /// the listing before issuing another index-based operation.
    pub fn delete(&self, username: &str, index: usize) -> Result<FinanceRecord> {
        let mut store: UserStore = read_document(&self.path)?;
        let records = store.entry(username.to_string()).or_default();
        let len = records.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let removed = records.remove(index);

        write_document(&self.path, &store)?;
        info!("Deleted record {} for {}", index, username);
        Ok(removed)
    }
}
