use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::KeyValueStore;

/// Removes every completed todo.
pub fn run<S: KeyValueStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let removed: Vec<_> = session.todos().iter().filter(|t| t.is_done).cloned().collect();
    let next = session.todos().remove_completed();
    session.commit_todos(next)?;

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("No completed todos to remove."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} completed todo{}",
            removed.len(),
            if removed.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_affected_todos(removed))
}
