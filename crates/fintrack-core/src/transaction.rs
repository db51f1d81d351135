//! The transaction data model.
//!
//! A `Transaction` is the sole entity in the ledger: one recorded income or
//! expense event. The persisted JSON shape uses the historical field names
//! (`type` for the kind tag), so blobs written by earlier versions of the
//! tracker deserialize unchanged.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a transaction adds to or subtracts from the balance.
///
/// The sign of a transaction is derived from this tag; `amount` is always a
/// positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Display label ("income" / "expense").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded income or expense event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: Uuid,

    /// Positive magnitude in currency units (single-currency ledger)
    pub amount: f64,

    /// Free-text label
    pub description: String,

    /// Calendar date as an ISO 8601 string
    pub date: String,

    /// Free-text grouping label (no fixed enumeration)
    pub category: String,

    /// Income or expense tag, serialized as `type`
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Parse the date field into its `(year, month)` calendar bucket.
    ///
    /// Accepts plain `YYYY-MM-DD` dates or full RFC 3339 timestamps.
    /// Returns `None` for anything unparseable; date-bucketed aggregates
    /// skip such records rather than erroring.
    pub fn month(&self) -> Option<(i32, u32)> {
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return Some((date.year(), date.month()));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some((dt.year(), dt.month()));
        }
        None
    }
}

/// A transaction draft without an id, accepted by the ledger's `add`.
///
/// The store assigns the id; callers never pick one.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub category: String,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            date: date.into(),
            category: category.into(),
            kind,
        }
    }

    /// Promote the draft into a full record with the given id.
    pub(crate) fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            category: self.category,
            kind: self.kind,
        }
    }
}
