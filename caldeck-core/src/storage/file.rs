//! Directory-backed key-value store.

use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::{CalDeckError, CalDeckResult};

/// Stores each key as a `<key>.json` file inside a directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> CalDeckResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CalDeckError::Persistence(format!(
                "invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CalDeckResult<Option<String>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path).map(Some).map_err(|e| {
            CalDeckError::Persistence(format!("could not read {}: {e}", path.display()))
        })
    }

    fn set(&mut self, key: &str, value: &str) -> CalDeckResult<()> {
        let path = self.path_for(key)?;
        let temp = self.dir.join(format!("{}.json.tmp", key));

        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(&temp, value))
            .and_then(|_| std::fs::rename(&temp, &path))
            .map_err(|e| {
                CalDeckError::Persistence(format!("could not write {}: {e}", path.display()))
            })
    }
}
