use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person typing into the chat box.
    User,
    /// The canned-response assistant.
    Assistant,
}

impl Sender {
    /// Returns the snake_case name used in logs and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

// =============================================================================
// Newtype Wrappers - Temporal
// =============================================================================

/// Unix timestamp in seconds since epoch.
///
/// Compared by value. Two Timestamps with the same inner value are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0, 0).unwrap_or_default()
    }

    pub fn age_hours(&self) -> i64 {
        let elapsed = Timestamp::now().0 - self.0;
        elapsed / 3600
    }
}

// =============================================================================
// Entity Structs (defined in cropcast-core for shared use)
// =============================================================================

/// A single turn in a conversation.
///
/// Immutable once created; the conversation log is the sole owner, and
/// observers receive clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh ID and the current time.
    pub fn new(sender: Sender, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text,
            timestamp: Utc::now(),
        }
    }

    /// Create a user-authored message.
    pub fn user(text: String) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create an assistant-authored message.
    pub fn assistant(text: String) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

// =============================================================================
// Tests
// =============================================================================
