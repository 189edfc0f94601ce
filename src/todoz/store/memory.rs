use super::KeyValueStore;
use crate::error::{Result, TodoError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for testing error paths.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Priority, Todo};
    use crate::persistence::{TODOS_KEY, USER_NAME_KEY};
    use chrono::{DateTime, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                todos: Vec::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_todo(&format!("Test todo {}", i + 1), 3, None);
            }
            self
        }

        pub fn with_todo(mut self, name: &str, priority: u8, deadline: Option<DateTime<Utc>>) -> Self {
            let todo = Todo::new(name.to_string(), Priority::new(priority).unwrap(), deadline);
            self.todos.push(todo);
            self.flush()
        }

        pub fn with_done_todo(mut self, name: &str) -> Self {
            let mut todo = Todo::new(name.to_string(), Priority::default(), None);
            todo.is_done = true;
            self.todos.push(todo);
            self.flush()
        }

        pub fn with_user_name(mut self, name: &str) -> Self {
            self.store.set(USER_NAME_KEY, name).unwrap();
            self
        }

        pub fn with_raw_todos(mut self, raw: &str) -> Self {
            self.store.set(TODOS_KEY, raw).unwrap();
            self
        }

        fn flush(mut self) -> Self {
            let json = serde_json::to_string(&self.todos).unwrap();
            self.store.set(TODOS_KEY, &json).unwrap();
            self
        }
    }
}
