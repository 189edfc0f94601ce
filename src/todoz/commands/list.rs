use crate::commands::{CmdResult, Welcome};
use crate::error::Result;
use crate::index::index_todos;
use crate::session::Session;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Open,
    Done,
}

/// Lists todos with their display indexes. Indexes are assigned before
/// filtering, so they stay valid for follow-up commands.
pub fn run<S: KeyValueStore>(session: &Session<S>, filter: TodoFilter) -> Result<CmdResult> {
    let listed = index_todos(session.todos())
        .into_iter()
        .filter(|dt| match filter {
            TodoFilter::All => true,
            TodoFilter::Open => !dt.todo.is_done,
            TodoFilter::Done => dt.todo.is_done,
        })
        .collect();

    let welcome = Welcome {
        user_name: session.user_name().to_string(),
        uncompleted_count: session.todos().uncompleted_count(),
    };

    Ok(CmdResult::default()
        .with_listed_todos(listed)
        .with_welcome(welcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn session() -> Session<crate::store::memory::InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_todo("Open one", 3, None)
            .with_done_todo("Done one")
            .with_todo("Open two", 1, None)
            .with_user_name("Tanuki");
        Session::hydrate(fixture.store).unwrap()
    }

    #[test]
    fn lists_everything_with_welcome() {
        let result = run(&session(), TodoFilter::All).unwrap();
        assert_eq!(result.listed_todos.len(), 3);
        assert_eq!(
            result.welcome,
            Some(Welcome {
                user_name: "Tanuki".to_string(),
                uncompleted_count: 2,
            })
        );
    }

    #[test]
    fn open_filter_keeps_original_indexes() {
        let result = run(&session(), TodoFilter::Open).unwrap();
        let indexes: Vec<usize> = result.listed_todos.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 3]);
    }

    #[test]
    fn done_filter() {
        let result = run(&session(), TodoFilter::Done).unwrap();
        assert_eq!(result.listed_todos.len(), 1);
        assert_eq!(result.listed_todos[0].index, 2);
    }
}
