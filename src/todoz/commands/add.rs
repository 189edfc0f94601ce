use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Priority;
use crate::session::Session;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};

pub fn run<S: KeyValueStore>(
    session: &mut Session<S>,
    name: &str,
    priority: Priority,
    deadline: Option<DateTime<Utc>>,
) -> Result<CmdResult> {
    let (next, id) = session.todos().add(name, priority, deadline)?;
    session.commit_todos(next)?;

    let mut result = CmdResult::default();
    if let Some(todo) = session.todos().get(&id) {
        result.add_message(CmdMessage::success(format!(
            "Todo added ({}): {}",
            session.todos().len(),
            todo.name
        )));
        result.affected_todos.push(todo.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::StoreFixture;

    fn session_with_milk() -> Session<crate::store::memory::InMemoryStore> {
        let fixture = StoreFixture::new().with_todo("Buy milk", 2, None);
        Session::hydrate(fixture.store).unwrap()
    }

    #[test]
    fn adds_and_persists() {
        let mut session = session_with_milk();
        let result = run(&mut session, "Call mom", Priority::new(5).unwrap(), None).unwrap();

        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.affected_todos[0].name, "Call mom");
        assert_eq!(session.todos().len(), 2);

        let stored = session.persistence().load_todos().unwrap().unwrap();
        assert_eq!(stored.last().unwrap().name, "Call mom");
        assert_eq!(stored.last().unwrap().deadline, None);
    }

    #[test]
    fn invalid_name_leaves_store_unchanged() {
        let mut session = session_with_milk();
        let err = run(&mut session, "A", Priority::default(), None).unwrap_err();

        assert!(matches!(err, TodoError::Validation(ref msg) if !msg.is_empty()));
        assert_eq!(session.todos().len(), 1);
        assert_eq!(session.persistence().load_todos().unwrap().unwrap().len(), 1);
    }
}
