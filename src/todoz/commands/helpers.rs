use crate::error::{Result, TodoError};
use crate::index::{resolve, TodoSelector};
use crate::session::Session;
use crate::store::KeyValueStore;
use std::collections::HashSet;
use uuid::Uuid;

/// Resolves every selector against the session's current list. Fails on the
/// first selector that does not match, before anything is changed.
///
/// Selectors naming the same todo (an index and a prefix of its id, say)
/// collapse into the first one.
pub fn resolve_selectors<S: KeyValueStore>(
    session: &Session<S>,
    selectors: &[TodoSelector],
) -> Result<Vec<(TodoSelector, Uuid)>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(selectors.len());
    for sel in selectors {
        let id = resolve(session.todos(), sel).map_err(TodoError::Api)?;
        if seen.insert(id) {
            resolved.push((sel.clone(), id));
        }
    }
    Ok(resolved)
}

/// Fails when no selector was given at all.
pub fn require_selectors(selectors: &[TodoSelector]) -> Result<()> {
    if selectors.is_empty() {
        return Err(TodoError::Api("No todos selected".to_string()));
    }
    Ok(())
}
