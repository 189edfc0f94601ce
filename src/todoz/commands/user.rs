use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::KeyValueStore;

pub fn show<S: KeyValueStore>(session: &Session<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(session.user_name()));
    Ok(result)
}

/// Stores a new display name. The name is kept exactly as given.
pub fn rename<S: KeyValueStore>(session: &mut Session<S>, name: String) -> Result<CmdResult> {
    session.commit_user_name(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User name set to {}",
        session.user_name()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::USER_NAME_KEY;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn rename_persists_under_its_own_key() {
        let fixture = StoreFixture::new().with_todos(2);
        let mut session = Session::hydrate(fixture.store).unwrap();
        let todos_before = session.todos().clone();

        rename(&mut session, "Tanuki".to_string()).unwrap();

        assert_eq!(session.user_name(), "Tanuki");
        assert_eq!(session.todos(), &todos_before);
        let store = session.into_store();
        assert_eq!(store.get(USER_NAME_KEY).unwrap().as_deref(), Some("Tanuki"));
    }

    #[test]
    fn show_reports_default() {
        let fixture = StoreFixture::new().with_todos(1);
        let session = Session::hydrate(fixture.store).unwrap();
        let result = show(&session).unwrap();
        assert_eq!(result.messages[0].content, "unknown");
    }
}
