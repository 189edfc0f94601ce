use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::session::Session;
use crate::store::KeyValueStore;

use super::helpers::{require_selectors, resolve_selectors};

pub fn complete<S: KeyValueStore>(
    session: &mut Session<S>,
    selectors: &[TodoSelector],
) -> Result<CmdResult> {
    completion_state(session, selectors, true)
}

pub fn reopen<S: KeyValueStore>(
    session: &mut Session<S>,
    selectors: &[TodoSelector],
) -> Result<CmdResult> {
    completion_state(session, selectors, false)
}

fn completion_state<S: KeyValueStore>(
    session: &mut Session<S>,
    selectors: &[TodoSelector],
    is_done: bool,
) -> Result<CmdResult> {
    require_selectors(selectors)?;
    let resolved = resolve_selectors(session, selectors)?;

    let next = resolved
        .iter()
        .fold(session.todos().clone(), |list, (_, id)| {
            list.set_completion(id, is_done)
        });
    session.commit_todos(next)?;

    let verb = if is_done { "completed" } else { "reopened" };
    let mut result = CmdResult::default();
    for (selector, id) in resolved {
        if let Some(todo) = session.todos().get(&id) {
            result.add_message(CmdMessage::success(format!(
                "Todo {} ({}): {}",
                verb, selector, todo.name
            )));
            result.affected_todos.push(todo.clone());
        }
    }
    Ok(result)
}
