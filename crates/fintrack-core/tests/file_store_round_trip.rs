use fintrack_core::storage::{BlobStore, JsonFileStore};
use fintrack_core::store::{LedgerStore, LoadOutcome, STORAGE_KEY};
use fintrack_core::transaction::{NewTransaction, TransactionKind};

use tempfile::tempdir;

#[test]
fn test_first_open_seeds_and_reopen_loads() {
    let dir = tempdir().expect("tempdir should be available");

    let store = JsonFileStore::open(dir.path()).expect("open store");
    let ledger = LedgerStore::open(store).expect("open ledger");
    assert_eq!(ledger.load_outcome(), LoadOutcome::Seeded);
    let seeded = ledger.transactions().to_vec();
    assert!(!seeded.is_empty());

    // A second open against the same directory loads what the first persisted
    let store = JsonFileStore::open(dir.path()).expect("reopen store");
    let reopened = LedgerStore::open(store).expect("reopen ledger");
    assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded);
    assert_eq!(reopened.transactions(), seeded.as_slice());
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = tempdir().expect("tempdir should be available");

    let store = JsonFileStore::open(dir.path()).expect("open store");
    let mut ledger = LedgerStore::open(store).expect("open ledger");
    let created = ledger
        .add(NewTransaction::new(
            TransactionKind::Expense,
            50.0,
            "Coffee",
            "2024-06-03",
            "Food",
        ))
        .expect("add");
    let first_seed_id = ledger.transactions().last().expect("seeded record").id;
    assert!(ledger.delete(&first_seed_id).expect("delete"));

    let store = JsonFileStore::open(dir.path()).expect("reopen store");
    let reopened = LedgerStore::open(store).expect("reopen ledger");
    assert_eq!(reopened.get(&created.id), Some(&created));
    assert!(reopened.get(&first_seed_id).is_none());
}

#[test]
fn test_corrupt_file_recovers_to_empty() {
    let dir = tempdir().expect("tempdir should be available");

    let mut store = JsonFileStore::open(dir.path()).expect("open store");
    store
        .set(STORAGE_KEY, "definitely not a transaction list")
        .expect("write corrupt blob");

    let ledger = LedgerStore::open(store).expect("open ledger");
    assert_eq!(ledger.load_outcome(), LoadOutcome::Recovered);
    assert!(ledger.transactions().is_empty());

    // Recovery is durable: the next open is a clean load, not a reseed
    let store = JsonFileStore::open(dir.path()).expect("reopen store");
    let reopened = LedgerStore::open(store).expect("reopen ledger");
    assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded);
    assert!(reopened.transactions().is_empty());
}
