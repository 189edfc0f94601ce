//! # The Todo List
//!
//! [`TodoList`] is the ordered, in-memory collection of todos. Order is insertion
//! order until a sort is requested; each sort re-orders the current sequence with
//! a stable sort, so running the same sort twice changes nothing, while two
//! different sorts do not compose (the second one decides the order, ties keep
//! whatever order the first left behind).
//!
//! Every operation borrows the list and returns a new one. A failed operation
//! returns an error and leaves the original untouched, which is what lets
//! [`crate::session::Session`] swap in the result only after it is known good.
//!
//! ## Missing ids
//!
//! - `update` on a missing id is an error ([`TodoError::NotFound`]).
//! - `set_completion` and `remove` on a missing id return an identical list.

use crate::error::{Result, TodoError};
use crate::model::{Priority, Todo};
use crate::validation::validate_name;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Todo> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn uncompleted_count(&self) -> usize {
        self.items.iter().filter(|t| !t.is_done).count()
    }

    /// Appends a new open todo. Returns the new list and the id it was given.
    pub fn add(
        &self,
        name: &str,
        priority: Priority,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<(TodoList, Uuid)> {
        check_name(name)?;
        let todo = Todo::new(name.to_string(), priority, deadline);
        let id = todo.id;
        let mut items = self.items.clone();
        items.push(todo);
        Ok((Self { items }, id))
    }

    /// Replaces name, priority and deadline of an existing todo. The id and
    /// completion flag are kept.
    pub fn update(
        &self,
        id: &Uuid,
        name: &str,
        priority: Priority,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<TodoList> {
        if self.get(id).is_none() {
            return Err(TodoError::NotFound(*id));
        }
        check_name(name)?;
        Ok(self.map_matching(id, |todo| Todo {
            name: name.to_string(),
            priority,
            deadline,
            ..todo.clone()
        }))
    }

    pub fn set_completion(&self, id: &Uuid, value: bool) -> TodoList {
        self.map_matching(id, |todo| Todo {
            is_done: value,
            ..todo.clone()
        })
    }

    pub fn remove(&self, id: &Uuid) -> TodoList {
        self.retain(|t| &t.id != id)
    }

    pub fn remove_completed(&self) -> TodoList {
        self.retain(|t| !t.is_done)
    }

    pub fn sort_by_priority_descending(&self) -> TodoList {
        self.sorted_by(|a, b| b.priority.cmp(&a.priority))
    }

    /// Dated todos first, soonest deadline first; undated todos after all of them.
    pub fn sort_by_deadline_ascending(&self) -> TodoList {
        self.sorted_by(|a, b| match (a.deadline, b.deadline) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }

    fn map_matching<F>(&self, id: &Uuid, f: F) -> TodoList
    where
        F: Fn(&Todo) -> Todo,
    {
        let items = self
            .items
            .iter()
            .map(|t| if &t.id == id { f(t) } else { t.clone() })
            .collect();
        Self { items }
    }

    fn retain<F>(&self, keep: F) -> TodoList
    where
        F: Fn(&Todo) -> bool,
    {
        let items = self.items.iter().filter(|t| keep(t)).cloned().collect();
        Self { items }
    }

    fn sorted_by<F>(&self, compare: F) -> TodoList
    where
        F: FnMut(&Todo, &Todo) -> Ordering,
    {
        let mut items = self.items.clone();
        // `sort_by` is stable: equal keys keep their input order.
        items.sort_by(compare);
        Self { items }
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn check_name(name: &str) -> Result<()> {
    let message = validate_name(name);
    if message.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn p(n: u8) -> Priority {
        Priority::new(n).unwrap()
    }

    fn at(day: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap())
    }

    fn names(list: &TodoList) -> Vec<&str> {
        list.iter().map(|t| t.name.as_str()).collect()
    }

    fn build(entries: &[(&str, u8, Option<DateTime<Utc>>)]) -> TodoList {
        entries
            .iter()
            .fold(TodoList::new(), |list, (name, prio, deadline)| {
                list.add(name, p(*prio), *deadline).unwrap().0
            })
    }

    #[test]
    fn add_appends_open_todo() {
        let list = build(&[("Buy milk", 2, None)]);
        let (list, id) = list.add("Call mom", p(5), None).unwrap();

        assert_eq!(list.len(), 2);
        let added = list.get(&id).unwrap();
        assert_eq!(added.name, "Call mom");
        assert!(!added.is_done);
        assert!(list.as_slice()[1].priority > list.as_slice()[0].priority);
    }

    #[test]
    fn add_rejects_short_name_and_leaves_list_alone() {
        let list = build(&[("Buy milk", 2, None)]);
        let err = list.add("A", p(3), None).unwrap_err();

        match err {
            TodoError::Validation(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(names(&list), vec!["Buy milk"]);
    }

    #[test]
    fn add_rejects_long_name() {
        let list = TodoList::new();
        assert!(matches!(
            list.add(&"x".repeat(33), p(3), None),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn update_keeps_id_and_completion() {
        let list = build(&[("Buy milk", 2, None)]);
        let id = list.as_slice()[0].id;
        let list = list.set_completion(&id, true);

        let updated = list.update(&id, "Buy oat milk", p(4), at(3)).unwrap();
        let todo = updated.get(&id).unwrap();
        assert_eq!(todo.id, id);
        assert!(todo.is_done);
        assert_eq!(todo.name, "Buy oat milk");
        assert_eq!(todo.priority, p(4));
        assert_eq!(todo.deadline, at(3));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let list = build(&[("Buy milk", 2, None)]);
        let missing = Uuid::new_v4();
        assert!(matches!(
            list.update(&missing, "Whatever", p(1), None),
            Err(TodoError::NotFound(id)) if id == missing
        ));
    }

    #[test]
    fn update_validates_name() {
        let list = build(&[("Buy milk", 2, None)]);
        let id = list.as_slice()[0].id;
        assert!(matches!(
            list.update(&id, "", p(1), None),
            Err(TodoError::Validation(_))
        ));
        assert_eq!(list.get(&id).unwrap().name, "Buy milk");
    }

    #[test]
    fn set_completion_touches_only_target() {
        let list = build(&[("One!", 1, None), ("Two!", 2, None)]);
        let first = list.as_slice()[0].id;
        let list = list.set_completion(&first, true);
        assert!(list.as_slice()[0].is_done);
        assert!(!list.as_slice()[1].is_done);
    }

    #[test]
    fn set_completion_missing_id_is_noop() {
        let list = build(&[("One!", 1, None)]);
        assert_eq!(list.set_completion(&Uuid::new_v4(), true), list);
    }

    #[test]
    fn remove_by_id() {
        let list = build(&[("One!", 1, None), ("Two!", 2, None)]);
        let first = list.as_slice()[0].id;
        assert_eq!(names(&list.remove(&first)), vec!["Two!"]);
        assert_eq!(list.remove(&Uuid::new_v4()), list);
    }

    #[test]
    fn remove_completed_is_idempotent() {
        let list = build(&[("One!", 1, None), ("Two!", 2, None), ("Three", 3, None)]);
        let second = list.as_slice()[1].id;
        let list = list.set_completion(&second, true);

        let once = list.remove_completed();
        let twice = once.remove_completed();
        assert_eq!(names(&once), vec!["One!", "Three"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn priority_sort_scenario() {
        let list = build(&[("Buy milk", 2, None)]);
        let (list, _) = list.add("Call mom", p(5), None).unwrap();
        let sorted = list.sort_by_priority_descending();
        assert_eq!(names(&sorted), vec!["Call mom", "Buy milk"]);
    }

    #[test]
    fn priority_sort_is_stable_and_idempotent() {
        let list = build(&[
            ("Low1", 1, None),
            ("Mid1", 3, None),
            ("Low2", 1, None),
            ("Mid2", 3, None),
            ("Top!", 5, None),
        ]);
        let once = list.sort_by_priority_descending();
        assert_eq!(names(&once), vec!["Top!", "Mid1", "Mid2", "Low1", "Low2"]);
        assert_eq!(once.sort_by_priority_descending(), once);
    }

    #[test]
    fn deadline_sort_puts_undated_last() {
        let list = build(&[
            ("None1", 3, None),
            ("Late", 3, at(20)),
            ("None2", 3, None),
            ("Soon", 3, at(2)),
            ("Mid!", 3, at(10)),
        ]);
        let sorted = list.sort_by_deadline_ascending();
        assert_eq!(names(&sorted), vec!["Soon", "Mid!", "Late", "None1", "None2"]);
        assert_eq!(sorted.sort_by_deadline_ascending(), sorted);
    }

    #[test]
    fn deadline_sort_keeps_ties_in_input_order() {
        let list = build(&[("Bb", 1, at(5)), ("Aa", 5, at(5))]);
        assert_eq!(names(&list.sort_by_deadline_ascending()), vec!["Bb", "Aa"]);
    }

    #[test]
    fn operations_do_not_mutate_the_original() {
        let list = build(&[("One!", 1, None)]);
        let before = list.clone();
        let id = list.as_slice()[0].id;

        let _ = list.add("Two!", p(2), None).unwrap();
        let _ = list.set_completion(&id, true);
        let _ = list.remove(&id);
        let _ = list.sort_by_priority_descending();

        assert_eq!(list, before);
    }

    #[test]
    fn uncompleted_count_ignores_done() {
        let list = build(&[("One!", 1, None), ("Two!", 2, None)]);
        let first = list.as_slice()[0].id;
        assert_eq!(list.uncompleted_count(), 2);
        assert_eq!(list.set_completion(&first, true).uncompleted_count(), 1);
    }
}
