use crate::model::{Priority, Todo};
use chrono::{Duration, Utc};

/// Starting list for a store with nothing usable in it.
///
/// Deadlines are relative to the moment of seeding, so a fresh install always
/// has one upcoming deadline and one completed item ready for `clear`.
pub fn seed_todos() -> Vec<Todo> {
    let now = Utc::now();
    let entries = [
        ("Read the todoz help", 5, Some(now + Duration::days(1)), false),
        ("Add your first task", 3, None, false),
        ("Clear completed tasks", 1, Some(now - Duration::hours(2)), true),
        ("Sort by deadline", 2, None, false),
    ];

    entries
        .into_iter()
        .map(|(name, priority, deadline, is_done)| {
            let priority = Priority::new(priority).unwrap_or_default();
            let mut todo = Todo::new(name.to_string(), priority, deadline);
            todo.is_done = is_done;
            todo
        })
        .collect()
}
