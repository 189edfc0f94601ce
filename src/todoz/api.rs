//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all todoz operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Session`] (the todo list, display name and persistence)
//! - **Normalizes inputs** (selector strings → [`TodoSelector`]s)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and no formatting; rendering happens on demand in
//! the UI after each call returns.
//!
//! ## Generic Over KeyValueStore
//!
//! `TodoApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::config::TodozConfig;
use crate::error::{Result, TodoError};
use crate::index::{parse_selectors, TodoSelector};
use crate::model::Priority;
use crate::session::Session;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};

/// The main API facade for todoz operations.
pub struct TodoApi<S: KeyValueStore> {
    session: Session<S>,
    paths: commands::TodozPaths,
}

impl<S: KeyValueStore> TodoApi<S> {
    /// Hydrates state from `store`. Nothing is written before this returns,
    /// apart from the seed list when storage had no usable todos.
    pub fn open(store: S, paths: commands::TodozPaths) -> Result<Self> {
        let session = Session::hydrate(store)?;
        Ok(Self { session, paths })
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn paths(&self) -> &commands::TodozPaths {
        &self.paths
    }

    pub fn config(&self) -> Result<TodozConfig> {
        TodozConfig::load(&self.paths.data_dir)
    }

    pub fn add_todo(
        &mut self,
        name: &str,
        priority: Option<Priority>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<commands::CmdResult> {
        let priority = match priority {
            Some(p) => p,
            None => self.config()?.default_priority,
        };
        commands::add::run(&mut self.session, name, priority, deadline)
    }

    pub fn update_todos(&mut self, updates: &[commands::TodoUpdate]) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.session, updates)
    }

    pub fn complete_todos<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = self.selectors(inputs)?;
        commands::complete::complete(&mut self.session, &selectors)
    }

    pub fn reopen_todos<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = self.selectors(inputs)?;
        commands::complete::reopen(&mut self.session, &selectors)
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = self.selectors(inputs)?;
        commands::delete::run(&mut self.session, &selectors)
    }

    pub fn clear_completed(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.session)
    }

    pub fn sort_todos(&mut self, key: SortKey) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.session, key)
    }

    pub fn list_todos(&self, filter: TodoFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.session, filter)
    }

    pub fn user_name(&self) -> Result<commands::CmdResult> {
        commands::user::show(&self.session)
    }

    pub fn rename_user(&mut self, name: String) -> Result<commands::CmdResult> {
        commands::user::rename(&mut self.session, name)
    }

    pub fn check_name(&self, candidate: &str) -> commands::CmdResult {
        commands::check::name(candidate)
    }

    pub fn configure(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Parses user-typed selectors (indexes, ranges, id prefixes) against the
    /// current list.
    pub fn selectors<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<TodoSelector>> {
        parse_selectors(inputs, self.session.todos().len()).map_err(TodoError::Api)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::TodoFilter;
pub use crate::commands::sort::SortKey;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, TodoUpdate, TodozPaths, Welcome};
