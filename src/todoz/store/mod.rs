//! # Storage Layer
//!
//! todoz persists its state the way a browser app uses local storage: a flat
//! key-value store of strings. The [`KeyValueStore`] trait is that store; the
//! [`crate::persistence`] adapter decides which keys exist and what goes in them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. One file per key inside a data
//!   directory. Writes go to a temporary file first and are renamed into
//!   place, so a value is either the old one or the new one, never half of each.
//!
//! - [`memory::InMemoryStore`]: A `HashMap` for testing. Nothing is persisted.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.local/share/todoz/
//! ├── TodoApp        # JSON array of todos
//! ├── UserName       # display name, plain text
//! └── config.json    # configuration (see config.rs)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract string-to-string storage.
///
/// Values are replaced wholesale on every `set`; there are no partial updates.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing whatever was there.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
