//! In-process key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{CalDeckError, CalDeckResult};

/// A `KeyValueStore` backed by a `HashMap`.
///
/// Writes can be made to fail on demand, which lets callers exercise
/// their persistence error paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing `fail_writes`.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, for inspection.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CalDeckResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CalDeckResult<()> {
        if self.fail_writes {
            return Err(CalDeckError::Persistence(format!(
                "write to '{}' rejected",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
