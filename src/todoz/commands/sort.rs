use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_todos;
use crate::session::Session;
use crate::store::KeyValueStore;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest priority first
    Priority,
    /// Soonest deadline first, undated last
    Deadline,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Priority => write!(f, "priority"),
            SortKey::Deadline => write!(f, "deadline"),
        }
    }
}

/// Re-orders the list and stores the new order.
pub fn run<S: KeyValueStore>(session: &mut Session<S>, key: SortKey) -> Result<CmdResult> {
    let next = match key {
        SortKey::Priority => session.todos().sort_by_priority_descending(),
        SortKey::Deadline => session.todos().sort_by_deadline_ascending(),
    };
    session.commit_todos(next)?;

    let mut result = CmdResult::default().with_listed_todos(index_todos(session.todos()));
    result.add_message(CmdMessage::success(format!("Sorted by {}", key)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{TimeZone, Utc};

    fn names<S: KeyValueStore>(session: &Session<S>) -> Vec<String> {
        session.todos().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn priority_sort_is_persisted() {
        let fixture = StoreFixture::new()
            .with_todo("Buy milk", 2, None)
            .with_todo("Call mom", 5, None);
        let mut session = Session::hydrate(fixture.store).unwrap();

        let result = run(&mut session, SortKey::Priority).unwrap();
        assert_eq!(names(&session), vec!["Call mom", "Buy milk"]);
        assert_eq!(result.listed_todos[0].index, 1);
        assert_eq!(result.listed_todos[0].todo.name, "Call mom");

        let stored = session.persistence().load_todos().unwrap().unwrap();
        assert_eq!(stored[0].name, "Call mom");
    }

    #[test]
    fn deadline_sort_puts_undated_last() {
        let d = |day| Some(Utc.with_ymd_and_hms(2025, 7, day, 0, 0, 0).unwrap());
        let fixture = StoreFixture::new()
            .with_todo("Someday", 3, None)
            .with_todo("Later", 3, d(20))
            .with_todo("Sooner", 3, d(3));
        let mut session = Session::hydrate(fixture.store).unwrap();

        run(&mut session, SortKey::Deadline).unwrap();
        assert_eq!(names(&session), vec!["Sooner", "Later", "Someday"]);
    }
}
