//! Conversation events broadcast to UI subscribers.

use serde::{Deserialize, Serialize};

use cropcast_core::types::Message;

/// Events emitted by the conversation engine after state changes.
///
/// Consumed through the engine's broadcast channel by UI shells that want to
/// refresh the rendered log and the pending indicator without polling.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConversationEvent {
    /// A message was appended to the conversation log.
    MessageAppended { message: Message },

    /// The pending indicator flipped: `true` while a reply is being produced.
    PendingChanged { pending: bool },
}

impl ConversationEvent {
    /// Snake_case event name for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            ConversationEvent::MessageAppended { .. } => "message_appended",
            ConversationEvent::PendingChanged { .. } => "pending_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropcast_core::types::Sender;

    #[test]
    fn test_event_names() {
        let appended = ConversationEvent::MessageAppended {
            message: Message::user("hi".to_string()),
        };
        assert_eq!(appended.event_name(), "message_appended");

        let pending = ConversationEvent::PendingChanged { pending: true };
        assert_eq!(pending.event_name(), "pending_changed");
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = ConversationEvent::MessageAppended {
            message: Message::assistant("reply".to_string()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: ConversationEvent = serde_json::from_str(&json).unwrap();
        match back {
            ConversationEvent::MessageAppended { message } => {
                assert_eq!(message.sender, Sender::Assistant);
                assert_eq!(message.text, "reply");
            }
            _ => panic!("Expected MessageAppended"),
        }
    }

    #[test]
    fn test_pending_event_carries_flag() {
        let event = ConversationEvent::PendingChanged { pending: false };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("false"));
    }
}
