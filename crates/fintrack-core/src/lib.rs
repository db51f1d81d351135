//! # Fintrack Core
//!
//! Core library for fintrack - a personal finance tracker built around a
//! transaction ledger and a derived-metrics engine.
//!
//! This crate provides the domain logic independent of any presentation
//! layer:
//!
//! - **transaction**: the transaction data model
//! - **storage**: blob-store trait and the memory/file adapters
//! - **store**: the persisted ledger (load, add, update, delete)
//! - **metrics**: pure aggregations (totals, monthly buckets, category
//!   breakdown) over a ledger snapshot

pub mod error;
pub mod metrics;
pub mod storage;
pub mod store;
pub mod transaction;

pub use error::{FintrackError, Result};
pub use metrics::{CategorySlice, MonthSummary, Totals};
pub use storage::{BlobStore, JsonFileStore, MemoryStore};
pub use store::{LedgerStore, LoadOutcome, STORAGE_KEY};
pub use transaction::{NewTransaction, Transaction, TransactionKind};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
