//! # Session
//!
//! The owned application state: the current [`TodoList`], the display name, and
//! the [`Persistence`] adapter they are written through. There is no global state;
//! whoever drives the UI owns a `Session` and passes it by `&mut`.
//!
//! The only way to get a `Session` is [`Session::hydrate`], which reads storage
//! first. That ordering is what keeps an empty default from ever overwriting
//! data that simply had not been loaded yet.
//!
//! Every commit replaces the in-memory value and writes it out in the same call.
//! If the write fails the in-memory value is left as it was, so memory and
//! storage never disagree about the last successful mutation.

use crate::error::Result;
use crate::persistence::Persistence;
use crate::seed::seed_todos;
use crate::store::KeyValueStore;
use crate::todos::TodoList;

pub const DEFAULT_USER_NAME: &str = "unknown";

pub struct Session<S: KeyValueStore> {
    persistence: Persistence<S>,
    todos: TodoList,
    user_name: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Load state from storage. With no usable stored todos, the seed list is
    /// installed and written back immediately.
    pub fn hydrate(store: S) -> Result<Self> {
        let mut persistence = Persistence::new(store);

        let todos = match persistence.load_todos()? {
            Some(todos) => TodoList::from(todos),
            None => {
                let seed = seed_todos();
                tracing::info!(count = seed.len(), "initializing with seed todos");
                persistence.save_todos(&seed)?;
                TodoList::from(seed)
            }
        };

        let user_name = persistence
            .load_user_name()?
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        Ok(Self {
            persistence,
            todos,
            user_name,
        })
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn commit_todos(&mut self, todos: TodoList) -> Result<()> {
        self.persistence.save_todos(todos.as_slice())?;
        self.todos = todos;
        Ok(())
    }

    pub fn commit_user_name(&mut self, name: String) -> Result<()> {
        self.persistence.save_user_name(&name)?;
        self.user_name = name;
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }
}
