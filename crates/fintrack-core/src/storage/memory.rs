//! In-memory blob store.

use std::collections::HashMap;

use crate::error::Result;

use super::traits::BlobStore;

/// `HashMap`-backed blob store.
///
/// Nothing survives the process; intended for tests and short-lived
/// embeddings. Construction is infallible and starts empty unless seeded
/// with `with_blob`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate an existing or corrupt blob.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.into(), value.into());
        store
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
