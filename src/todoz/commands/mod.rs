use crate::config::TodozConfig;
use crate::index::{DisplayTodo, TodoSelector};
use crate::model::{Priority, Todo};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod add;
pub mod check;
pub mod clear;
pub mod complete;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod sort;
pub mod update;
pub mod user;

#[derive(Debug, Clone)]
pub struct TodozPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Summary line data shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub user_name: String,
    pub uncompleted_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<DisplayTodo>,
    pub welcome: Option<Welcome>,
    pub config: Option<TodozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_welcome(mut self, welcome: Welcome) -> Self {
        self.welcome = Some(welcome);
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A partial edit of one todo. Fields left as `None` keep their current value;
/// `deadline: Some(None)` clears the deadline.
#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub selector: TodoSelector,
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub deadline: Option<Option<DateTime<Utc>>>,
}

impl TodoUpdate {
    pub fn new(selector: TodoSelector) -> Self {
        Self {
            selector,
            name: None,
            priority: None,
            deadline: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
