//! Scripted sleep assistant.
//!
//! There is no language model behind this: messages are matched against an
//! ordered keyword table and answered from canned templates.

mod intent;
mod respond;

pub use intent::{classify, Intent};
pub use respond::{respond, respond_to, Snapshot};

use crate::error::Result;
use crate::model::ChatMessage;
use crate::storage::SleepStore;

/// First message of every conversation, and the only one after a reset.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your sleep assistant. I can help you track and improve your sleep patterns. How can I assist you today?";

pub fn welcome_message() -> ChatMessage {
    ChatMessage::assistant(WELCOME_MESSAGE)
}

/// Load the stored conversation, seeding the welcome message into an empty
/// history.
pub fn load_conversation<S: SleepStore + ?Sized>(store: &mut S) -> Result<Vec<ChatMessage>> {
    let messages = store.messages()?;
    if !messages.is_empty() {
        return Ok(messages);
    }
    let welcome = welcome_message();
    store.append_message(&welcome)?;
    Ok(vec![welcome])
}

/// Drop the history and start over with only the welcome message.
pub fn reset_conversation<S: SleepStore + ?Sized>(store: &mut S) -> Result<ChatMessage> {
    store.clear_messages()?;
    let welcome = welcome_message();
    store.append_message(&welcome)?;
    Ok(welcome)
}

/// Answer `text`, returning the user's message and the reply in order.
pub fn exchange(text: &str, snapshot: &Snapshot<'_>) -> (ChatMessage, ChatMessage) {
    let user = ChatMessage::user(text);
    let reply = ChatMessage::assistant(respond(text, snapshot));
    (user, reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{SleepStats, Thresholds};
    use crate::model::{Sender, SleepGoal};
    use crate::storage::SqliteStore;

    #[test]
    fn test_welcome_message() {
        let message = welcome_message();
        assert_eq!(message.sender, Sender::Assistant);
        assert_eq!(message.text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_exchange_orders_messages() {
        let goal = SleepGoal::default();
        let stats = SleepStats::default();
        let thresholds = Thresholds::default();
        let snapshot = Snapshot {
            entries: &[],
            goal: &goal,
            stats: &stats,
            thresholds: &thresholds,
        };
        let (user, reply) = exchange("hello", &snapshot);
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "hello");
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(reply.text.starts_with("Hello! I'm your sleep assistant."));
    }

    #[test]
    fn test_load_seeds_welcome_once() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let first = load_conversation(&mut store).unwrap();
        assert_eq!(first.len(), 1);
        let second = load_conversation(&mut store).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, first[0].id);
        assert_eq!(second[0].text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_reset_leaves_only_welcome() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.append_message(&ChatMessage::user("hello")).unwrap();
        store
            .append_message(&ChatMessage::assistant("hi"))
            .unwrap();

        reset_conversation(&mut store).unwrap();

        let messages = store.messages().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, WELCOME_MESSAGE);
    }
}
