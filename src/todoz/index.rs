//! # Display Indexes
//!
//! Todos are identified by UUIDs, which nobody wants to type. The CLI instead
//! shows each todo with its 1-based position in the current list order and lets
//! users refer to todos by that number. Ranges (`2-4`) expand to every index
//! in between.
//!
//! Because positions change when the list is sorted or items are removed, an id
//! prefix (at least [`MIN_ID_PREFIX`] hex characters, e.g. `3f8e3c1e`) is also
//! accepted for scripts that need something stable.

use crate::model::Todo;
use crate::todos::TodoList;
use std::collections::HashSet;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_ID_PREFIX: usize = 4;

/// A user input that names one todo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TodoSelector {
    Index(usize),
    IdPrefix(String),
}

impl std::fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoSelector::Index(i) => write!(f, "{}", i),
            TodoSelector::IdPrefix(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(TodoSelector::Index(n));
        }

        let is_hex = s.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
        if is_hex && s.len() >= MIN_ID_PREFIX {
            return Ok(TodoSelector::IdPrefix(s.to_ascii_lowercase()));
        }

        Err(format!("Invalid index format: {}", s))
    }
}

/// A todo paired with the index it is shown under.
#[derive(Debug, Clone)]
pub struct DisplayTodo {
    pub todo: Todo,
    pub index: usize,
}

/// Numbers the todos 1..=n in list order.
pub fn index_todos(todos: &TodoList) -> Vec<DisplayTodo> {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            todo: todo.clone(),
            index: i + 1,
        })
        .collect()
}

/// Parses one input which may be a single selector or an index range.
///
/// - Single: `"3"`, `"3f8e3c1e"`
/// - Range: `"3-5"` expands to 3, 4, 5
///
/// `count` is the length of the list the selectors will be resolved against;
/// a range reaching past it is refused before it is expanded.
pub fn parse_selector_or_range(s: &str, count: usize) -> Result<Vec<TodoSelector>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if let (Ok(a), Ok(b)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>()) {
            if a == 0 || b == 0 {
                return Err("Indexes start at 1".to_string());
            }
            if a > b {
                return Err(format!("Invalid range {}: start is after end", s));
            }
            if b > count {
                return Err(not_found(b, count));
            }
            return Ok((a..=b).map(TodoSelector::Index).collect());
        }
    }
    TodoSelector::from_str(s).map(|sel| vec![sel])
}

/// Parses several inputs, expanding ranges and dropping repeats while keeping
/// first-seen order.
pub fn parse_selectors<I: AsRef<str>>(
    inputs: &[I],
    count: usize,
) -> Result<Vec<TodoSelector>, String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for input in inputs {
        for sel in parse_selector_or_range(input.as_ref(), count)? {
            if seen.insert(sel.clone()) {
                out.push(sel);
            }
        }
    }
    Ok(out)
}

/// Resolves a selector against the current list.
pub fn resolve(todos: &TodoList, selector: &TodoSelector) -> Result<Uuid, String> {
    match selector {
        TodoSelector::Index(0) => Err("Indexes start at 1".to_string()),
        TodoSelector::Index(n) => todos
            .as_slice()
            .get(n - 1)
            .map(|t| t.id)
            .ok_or_else(|| not_found(*n, todos.len())),
        TodoSelector::IdPrefix(prefix) => {
            let matches: Vec<Uuid> = todos
                .iter()
                .filter(|t| t.id.to_string().starts_with(prefix.as_str()))
                .map(|t| t.id)
                .collect();
            match matches.as_slice() {
                [id] => Ok(*id),
                [] => Err(format!("No todo with id starting with {}", prefix)),
                _ => Err(format!(
                    "Id prefix {} is ambiguous ({} matches)",
                    prefix,
                    matches.len()
                )),
            }
        }
    }
}

fn not_found(index: usize, count: usize) -> String {
    format!("Index {} not found ({} todos)", index, count)
}
