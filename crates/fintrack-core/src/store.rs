//! The ledger store: the authoritative, persisted transaction list.
//!
//! `LedgerStore` owns the in-memory list, loads it from an injected
//! `BlobStore` at open, and re-persists the full list after every mutation.
//! There is no append log or diffing; the blob is always overwritten whole,
//! so the in-memory list and the persisted blob are consistent whenever a
//! mutating call returns.

use uuid::Uuid;

use crate::error::Result;
use crate::storage::BlobStore;
use crate::transaction::{NewTransaction, Transaction, TransactionKind};

/// Fixed key the serialized ledger lives under.
///
/// Kept identical to the key the original browser tracker used, so an
/// exported localStorage blob drops straight into a data directory.
pub const STORAGE_KEY: &str = "finance-tracker-transactions";

/// What `LedgerStore::open` found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed blob was loaded.
    Loaded,
    /// No blob existed; the starter dataset was seeded (first run).
    Seeded,
    /// The blob existed but did not deserialize; the ledger started empty.
    /// Non-fatal, but callers should surface a warning.
    Recovered,
}

/// Authoritative transaction list backed by a `BlobStore`.
///
/// Presentation layers receive read-only snapshots via `transactions()` and
/// issue add/update/delete intents; they never mutate the list directly.
pub struct LedgerStore<S: BlobStore> {
    blobs: S,
    transactions: Vec<Transaction>,
    load_outcome: LoadOutcome,
}

impl<S: BlobStore> LedgerStore<S> {
    /// Open the ledger, rehydrating the list from storage.
    ///
    /// First run (no blob) seeds a small starter dataset rather than an
    /// empty list; this is a deliberate onboarding behavior. A malformed
    /// blob fails closed: the ledger starts empty and the outcome reports
    /// `Recovered` so the caller can warn. The seeded list is persisted
    /// immediately so a subsequent open loads it.
    pub fn open(blobs: S) -> Result<Self> {
        let mut store = Self {
            blobs,
            transactions: Vec::new(),
            load_outcome: LoadOutcome::Loaded,
        };

        match store.blobs.get(STORAGE_KEY)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(list) => {
                    store.transactions = list;
                    store.load_outcome = LoadOutcome::Loaded;
                }
                Err(_) => {
                    store.transactions = Vec::new();
                    store.load_outcome = LoadOutcome::Recovered;
                    store.persist()?;
                }
            },
            None => {
                store.transactions = starter_transactions();
                store.load_outcome = LoadOutcome::Seeded;
                store.persist()?;
            }
        }

        Ok(store)
    }

    /// What the last `open` found in storage.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Read-only snapshot of the current list, most recently added first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id.
    pub fn get(&self, id: &Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == *id)
    }

    /// Record a new transaction.
    ///
    /// Assigns a fresh id guaranteed not to collide with any existing one,
    /// prepends the record, persists, and returns the created record.
    pub fn add(&mut self, draft: NewTransaction) -> Result<Transaction> {
        let mut id = Uuid::new_v4();
        while self.get(&id).is_some() {
            id = Uuid::new_v4();
        }
        let transaction = draft.into_transaction(id);
        self.transactions.insert(0, transaction.clone());
        self.persist()?;
        Ok(transaction)
    }

    /// Replace the stored record whose id matches.
    ///
    /// Returns `true` if a record was replaced, `false` if the id is
    /// unknown. An unknown id is not an error; the presentation layer may
    /// race an edit against an already-deleted record.
    pub fn update(&mut self, updated: Transaction) -> Result<bool> {
        let found = match self.transactions.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(found)
    }

    /// Remove the record with the given id.
    ///
    /// Returns `true` if a record was removed, `false` if the id is unknown
    /// (a no-op, not an error).
    pub fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != *id);
        let removed = self.transactions.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Serialize and overwrite the full list in storage.
    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.transactions)?;
        self.blobs.set(STORAGE_KEY, &blob)
    }
}

/// The starter dataset seeded on first run.
///
/// Mirrors the example transactions the original tracker shipped with, so a
/// first open shows a populated dashboard instead of an empty one.
pub fn starter_transactions() -> Vec<Transaction> {
    let seed = [
        (TransactionKind::Income, 2500.0, "Salary", "2024-01-15", "Income"),
        (TransactionKind::Expense, 850.0, "Rent", "2024-01-01", "Housing"),
        (TransactionKind::Expense, 120.0, "Groceries", "2024-01-10", "Food"),
        (TransactionKind::Expense, 45.0, "Gas", "2024-01-08", "Transportation"),
    ];
    seed.into_iter()
        .map(|(kind, amount, description, date, category)| {
            NewTransaction::new(kind, amount, description, date, category)
                .into_transaction(Uuid::new_v4())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn draft(kind: TransactionKind, amount: f64, category: &str) -> NewTransaction {
        NewTransaction::new(kind, amount, "test entry", "2024-06-05", category)
    }

    fn persisted_list(store: &LedgerStore<MemoryStore>) -> Vec<Transaction> {
        let blob = store
            .blobs
            .get(STORAGE_KEY)
            .unwrap()
            .expect("blob should exist after open");
        serde_json::from_str(&blob).expect("blob should be well-formed")
    }

    #[test]
    fn test_first_run_seeds_starter_dataset() {
        let store = LedgerStore::open(MemoryStore::new()).unwrap();
        assert_eq!(store.load_outcome(), LoadOutcome::Seeded);
        assert_eq!(store.transactions().len(), 4);
        // The seed is persisted immediately
        assert_eq!(persisted_list(&store).len(), 4);
    }

    #[test]
    fn test_open_loads_existing_blob() {
        let existing = starter_transactions();
        let blob = serde_json::to_string(&existing).unwrap();
        let store = LedgerStore::open(MemoryStore::with_blob(STORAGE_KEY, blob)).unwrap();
        assert_eq!(store.load_outcome(), LoadOutcome::Loaded);
        assert_eq!(store.transactions(), existing.as_slice());
    }

    #[test]
    fn test_malformed_blob_recovers_empty() {
        let store =
            LedgerStore::open(MemoryStore::with_blob(STORAGE_KEY, "{not json]")).unwrap();
        assert_eq!(store.load_outcome(), LoadOutcome::Recovered);
        assert!(store.transactions().is_empty());
        // The recovered empty list replaces the corrupt blob
        assert!(persisted_list(&store).is_empty());
    }

    #[test]
    fn test_foreign_shape_blob_recovers_empty() {
        // Valid JSON, wrong shape
        let store =
            LedgerStore::open(MemoryStore::with_blob(STORAGE_KEY, r#"{"hello":"world"}"#))
                .unwrap();
        assert_eq!(store.load_outcome(), LoadOutcome::Recovered);
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut store = LedgerStore::open(MemoryStore::new()).unwrap();
        let created = store
            .add(draft(TransactionKind::Expense, 50.0, "Food"))
            .unwrap();
        assert_eq!(store.transactions()[0], created);
        assert_eq!(store.transactions().len(), 5);
        assert_eq!(persisted_list(&store).len(), 5);
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let store = MemoryStore::with_blob(STORAGE_KEY, "[]");
        let mut store = LedgerStore::open(store).unwrap();
        let created = store
            .add(draft(TransactionKind::Expense, 50.0, "Food"))
            .unwrap();
        assert!(store.delete(&created.id).unwrap());
        assert!(store.transactions().is_empty());
        assert!(persisted_list(&store).is_empty());
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut store = LedgerStore::open(MemoryStore::new()).unwrap();
        let created = store
            .add(draft(TransactionKind::Expense, 50.0, "Food"))
            .unwrap();
        let mut edited = created.clone();
        edited.amount = 75.0;
        edited.description = "corrected entry".to_string();
        assert!(store.update(edited.clone()).unwrap());
        assert_eq!(store.get(&created.id), Some(&edited));
        assert!(persisted_list(&store).contains(&edited));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = LedgerStore::open(MemoryStore::new()).unwrap();
        let before = store.transactions().to_vec();
        let ghost = draft(TransactionKind::Income, 1.0, "Income")
            .into_transaction(Uuid::new_v4());
        assert!(!store.update(ghost).unwrap());
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = LedgerStore::open(MemoryStore::new()).unwrap();
        let before = store.transactions().to_vec();
        assert!(!store.delete(&Uuid::new_v4()).unwrap());
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_reopen_sees_persisted_mutations() {
        let mut store = LedgerStore::open(MemoryStore::new()).unwrap();
        store
            .add(draft(TransactionKind::Income, 900.0, "Income"))
            .unwrap();
        let snapshot = store.transactions().to_vec();

        let blob = store.blobs.get(STORAGE_KEY).unwrap().unwrap();
        let reopened = LedgerStore::open(MemoryStore::with_blob(STORAGE_KEY, blob)).unwrap();
        assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded);
        assert_eq!(reopened.transactions(), snapshot.as_slice());
    }
}
