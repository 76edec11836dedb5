//! Report engine: pure aggregation over a record collection
//!
//! Three views, each deterministic from the same immutable input:
//! per-category totals, per-category percentage of total, and per-month
//! totals. Empty input yields an explicit no-data result in every view so
//! callers can tell "no records" apart from "all-zero records".

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::FinanceRecord;

/// A calendar month key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Percentage distribution result
#[derive(Debug, Clone, PartialEq)]
pub enum PercentBreakdown {
    /// The collection has no records
    NoData,
    /// The amounts sum to zero, so percentages are undefined
    NotComputable,
    /// Percentage of total per category; entries sum to 100 modulo rounding
    PerCategory(BTreeMap<String, Decimal>),
}

/// Sum amounts per exact-match category
///
/// `None` means an empty collection; categories with no records are
/// omitted rather than zero-filled.
pub fn totals_by_category(records: &[FinanceRecord]) -> Option<BTreeMap<String, Decimal>> {
    if records.is_empty() {
        return None;
    }

    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.clone()).or_default() += record.amount;
    }
    Some(totals)
}

/// Each category's share of the total, as a percentage
pub fn percent_by_category(records: &[FinanceRecord]) -> PercentBreakdown {
    let Some(totals) = totals_by_category(records) else {
        return PercentBreakdown::NoData;
    };

    let total_sum: Decimal = totals.values().copied().sum();
    if total_sum.is_zero() {
        return PercentBreakdown::NotComputable;
    }

    let percentages = totals
        .into_iter()
        .map(|(category, sum)| (category, sum * Decimal::ONE_HUNDRED / total_sum))
        .collect();
    PercentBreakdown::PerCategory(percentages)
}

/// Sum amounts per calendar month, keys ascending regardless of input order
pub fn monthly_totals(records: &[FinanceRecord]) -> Option<BTreeMap<YearMonth, Decimal>> {
    if records.is_empty() {
        return None;
    }

    let mut totals: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date.into()).or_default() += record.amount;
    }
    Some(totals)
}
