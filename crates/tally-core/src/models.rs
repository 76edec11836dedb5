//! Domain models for tally

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format used everywhere a date crosses the process boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single finance transaction
///
/// Serializes to the interchange JSON used by pre-existing data files:
/// `description` and `category` as strings, `amount` as a JSON number,
/// `date` as a `YYYY-MM-DD` string. Records are never mutated in place;
/// an update replaces the record at an index wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub description: String,
    /// Positive = income, negative = expense, by caller convention.
    /// No sign validation is performed.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-form label; the grouping key for reports
    pub category: String,
    pub date: NaiveDate,
}

impl FinanceRecord {
    /// Build a record from raw input, parsing the date eagerly
    ///
    /// An unparseable date fails here, before any persistence is attempted.
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: &str,
    ) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| Error::DateFormat {
            value: date.to_string(),
            source: e,
        })?;

        Ok(Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        })
    }
}
