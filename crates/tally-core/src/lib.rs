//! Tally Core Library
//!
//! Shared functionality for the tally personal finance ledger:
//! - Finance record model and JSON interchange format
//! - Record store (per-user collections in one shared JSON document)
//! - Credential store with a pluggable password scheme
//! - Report engine (category totals, percentage distribution, monthly trends)

pub mod credentials;
pub mod error;
pub mod models;
pub mod report;
pub mod store;

pub use credentials::{CredentialStore, PasswordScheme, Plaintext};
pub use error::{Error, Result};
pub use models::FinanceRecord;
pub use report::{monthly_totals, percent_by_category, totals_by_category, PercentBreakdown, YearMonth};
pub use store::RecordStore;
