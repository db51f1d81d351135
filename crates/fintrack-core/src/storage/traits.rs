//! Storage adapter trait definition.
//!
//! The `BlobStore` trait defines the key-value contract the ledger store
//! persists through. This abstraction keeps the ledger independent of the
//! backing medium (memory, a file on disk, a browser's local storage when
//! embedded) and lets tests swap in a throwaway store.

use crate::error::Result;

/// Key-value blob store for serialized ledger state.
///
/// Implementations must ensure:
/// - `get` after `set` for the same key returns the value last written
/// - An unknown key reads as `None`, never an error
/// - Writes are durable (or as durable as the medium allows) when `set`
///   returns
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        // Ensures the trait definition is valid as a trait bound
        fn _accepts_blob_store<T: BlobStore>(_store: T) {}
    }
}
