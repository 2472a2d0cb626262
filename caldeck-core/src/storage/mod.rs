//! Key-value persistence collaborators.
//!
//! The core only ever sees the `KeyValueStore` trait. It stores whole
//! snapshots as text under fixed keys and never depends on the medium.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CalDeckResult;

/// A text key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` means nothing was stored.
    fn get(&self, key: &str) -> CalDeckResult<Option<String>>;

    /// Store `value` under `key`. Must be durable once it returns `Ok`.
    fn set(&mut self, key: &str, value: &str) -> CalDeckResult<()>;
}
