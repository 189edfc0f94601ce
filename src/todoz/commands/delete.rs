use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::session::Session;
use crate::store::KeyValueStore;

use super::helpers::{require_selectors, resolve_selectors};

pub fn run<S: KeyValueStore>(
    session: &mut Session<S>,
    selectors: &[TodoSelector],
) -> Result<CmdResult> {
    require_selectors(selectors)?;
    let resolved = resolve_selectors(session, selectors)?;

    // Keep the records so the caller can report what went away.
    let removed: Vec<_> = resolved
        .iter()
        .filter_map(|(sel, id)| session.todos().get(id).map(|t| (sel.clone(), t.clone())))
        .collect();

    let next = resolved
        .iter()
        .fold(session.todos().clone(), |list, (_, id)| list.remove(id));
    session.commit_todos(next)?;

    let mut result = CmdResult::default();
    for (selector, todo) in removed {
        result.add_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            selector, todo.name
        )));
        result.affected_todos.push(todo);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_selected_todos() {
        let fixture = StoreFixture::new()
            .with_todo("First", 1, None)
            .with_todo("Second", 2, None)
            .with_todo("Third", 3, None);
        let mut session = Session::hydrate(fixture.store).unwrap();

        // Indexes refer to positions before the delete.
        let result = run(
            &mut session,
            &[TodoSelector::Index(1), TodoSelector::Index(3)],
        )
        .unwrap();

        assert_eq!(result.affected_todos.len(), 2);
        let names: Vec<_> = session.todos().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Second"]);
        assert_eq!(session.persistence().load_todos().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn deleting_everything_keeps_an_empty_list() {
        let fixture = StoreFixture::new().with_todos(1);
        let mut session = Session::hydrate(fixture.store).unwrap();
        run(&mut session, &[TodoSelector::Index(1)]).unwrap();
        assert!(session.todos().is_empty());
    }

    #[test]
    fn same_todo_named_twice_is_deleted_once() {
        let fixture = StoreFixture::new().with_todos(2);
        let mut session = Session::hydrate(fixture.store).unwrap();
        let prefix = session.todos().as_slice()[0].id.to_string()[..8].to_string();

        let result = run(
            &mut session,
            &[TodoSelector::Index(1), TodoSelector::IdPrefix(prefix)],
        )
        .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(session.todos().len(), 1);
    }
}
