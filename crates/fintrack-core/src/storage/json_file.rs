//! File-backed blob store.
//!
//! Maps each key to `<data_dir>/<key>.json`. Writes go through a temp file
//! and an atomic rename, so a crash mid-write never leaves a half-written
//! ledger behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FintrackError, Result};

use super::traits::BlobStore;

/// Blob store persisting each key as a JSON file in a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| FintrackError::Storage(format!("Cannot create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let destination = self.blob_path(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&temp, value)?;
        rename_with_fallback(&temp, &destination)?;
        Ok(())
    }
}

/// Atomically rename a file, with fallback for platforms where rename fails
/// if the target exists (notably Windows). The temp file is cleaned up if
/// the rename ultimately fails.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
