#[cfg(test)]
#[path = "trigger_test.rs"]
mod tests;

use crate::domain::models::Message;
use crate::domain::models::Role;

/// Decides when a change to the message list should kick off generation.
///
/// Fires iff the list is non-empty, its last entry was authored by the user,
/// and that entry's id differs from the one it last fired for. The id check
/// makes the trigger idempotent per message-list state: re-observing the same
/// list never fires twice, and appending an AI reply never fires at all.
#[derive(Default)]
pub struct GenerationTrigger {
    last_fired_id: Option<String>,
}

impl GenerationTrigger {
    pub fn observe(&mut self, messages: &[Message]) -> bool {
        let last = match messages.last() {
            Some(message) => message,
            None => return false,
        };

        if last.role != Role::User {
            return false;
        }
        if self.last_fired_id.as_deref() == Some(last.id.as_str()) {
            return false;
        }

        self.last_fired_id = Some(last.id.to_string());
        return true;
    }
}
