use crate::error::{Result, TodoError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;
pub const DEFAULT_PRIORITY: u8 = 3;

/// Importance of a todo, 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_PRIORITY..=MAX_PRIORITY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TodoError::InvalidPriority(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One star per priority level.
    pub fn stars(self) -> String {
        "★".repeat(self.0 as usize)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(DEFAULT_PRIORITY)
    }
}

impl TryFrom<u8> for Priority {
    type Error = TodoError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task. Field names on the wire follow the `TodoApp` storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
    pub priority: Priority,
    #[serde(default, with = "crate::deadline::serde_option")]
    pub deadline: Option<DateTime<Utc>>,
}

impl Todo {
    /// Builds a fresh, open todo with a new id. The name is not validated here;
    /// that happens on the add/update path in [`crate::todos::TodoList`].
    pub fn new(name: String, priority: Priority, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            is_done: false,
            priority,
            deadline,
        }
    }

    /// Past its deadline and still open.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_done && self.deadline.is_some_and(|d| d < now)
    }
}
