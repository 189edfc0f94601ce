use crate::commands::{CmdMessage, CmdResult, TodoUpdate};
use crate::error::{Result, TodoError};
use crate::session::Session;
use crate::store::KeyValueStore;

use super::helpers::resolve_selectors;

/// Applies each update in turn. All selectors are resolved up front, and the
/// list is committed once at the end, so a failing update leaves storage as it was.
pub fn run<S: KeyValueStore>(session: &mut Session<S>, updates: &[TodoUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    let selectors: Vec<_> = updates.iter().map(|u| u.selector.clone()).collect();
    let resolved = resolve_selectors(session, &selectors)?;

    let mut next = session.todos().clone();
    let mut touched = Vec::with_capacity(resolved.len());
    for ((selector, id), update) in resolved.into_iter().zip(updates.iter()) {
        let current = next.get(&id).cloned().ok_or(TodoError::NotFound(id))?;
        let name = update.name.clone().unwrap_or(current.name);
        let priority = update.priority.unwrap_or(current.priority);
        let deadline = update.deadline.unwrap_or(current.deadline);

        next = next.update(&id, &name, priority, deadline)?;
        touched.push((selector, id));
    }

    session.commit_todos(next)?;

    let mut result = CmdResult::default();
    for (selector, id) in touched {
        if let Some(todo) = session.todos().get(&id) {
            result.add_message(CmdMessage::success(format!(
                "Todo updated ({}): {}",
                selector, todo.name
            )));
            result.affected_todos.push(todo.clone());
        }
    }
    Ok(result)
}
