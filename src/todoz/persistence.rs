//! # Persistence Adapter
//!
//! Maps application state onto two fixed keys of a [`KeyValueStore`]:
//!
//! | Key        | Value                                   |
//! |------------|-----------------------------------------|
//! | `TodoApp`  | JSON array of [`Todo`] records          |
//! | `UserName` | the display name as a plain string      |
//!
//! Saving always rewrites the whole value. Loading treats "absent", "empty
//! array" and "cannot be decoded" the same way: there is nothing usable, and
//! the caller falls back to the seed list. Storage I/O failures, on the other
//! hand, are real errors and propagate.
//!
//! Records read back are not re-validated against the name rules.

use crate::error::Result;
use crate::model::Todo;
use crate::store::KeyValueStore;

pub const TODOS_KEY: &str = "TodoApp";
pub const USER_NAME_KEY: &str = "UserName";

pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn load_todos(&self) -> Result<Option<Vec<Todo>>> {
        let Some(raw) = self.store.get(TODOS_KEY)? else {
            tracing::debug!(key = TODOS_KEY, "no stored todos");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Todo>>(&raw) {
            Ok(todos) if todos.is_empty() => Ok(None),
            Ok(todos) => {
                tracing::debug!(key = TODOS_KEY, count = todos.len(), "loaded todos");
                Ok(Some(todos))
            }
            Err(e) => {
                tracing::warn!(key = TODOS_KEY, error = %e, "stored todos are unreadable, ignoring them");
                Ok(None)
            }
        }
    }

    pub fn save_todos(&mut self, todos: &[Todo]) -> Result<()> {
        let json = serde_json::to_string(todos)?;
        self.store.set(TODOS_KEY, &json)?;
        tracing::debug!(key = TODOS_KEY, count = todos.len(), "saved todos");
        Ok(())
    }

    pub fn load_user_name(&self) -> Result<Option<String>> {
        self.store.get(USER_NAME_KEY)
    }

    pub fn save_user_name(&mut self, name: &str) -> Result<()> {
        self.store.set(USER_NAME_KEY, name)?;
        tracing::debug!(key = USER_NAME_KEY, "saved user name");
        Ok(())
    }
}
