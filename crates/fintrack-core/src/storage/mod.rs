//! Storage adapters for the persisted ledger blob.
//!
//! The ledger is persisted as a single string blob under a fixed key; the
//! `BlobStore` trait is the seam between the ledger store and whatever
//! actually holds that blob. Two implementations are provided: an in-memory
//! map for tests and embedding, and a JSON-file store for the CLI.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BlobStore;
