use crate::commands::{CmdMessage, CmdResult};
use crate::validation::validate_name;

/// Runs name validation without touching any state, for live feedback while a
/// name is being typed.
pub fn name(candidate: &str) -> CmdResult {
    let mut result = CmdResult::default();
    let message = validate_name(candidate);
    if message.is_empty() {
        result.add_message(CmdMessage::success("Name is valid"));
    } else {
        result.add_message(CmdMessage::error(message));
    }
    result
}
