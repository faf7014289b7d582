//! Conversational assistant for CropCast.
//!
//! Provides the keyword-driven reply rules, the append-only conversation
//! log, and the engine that ties them together behind a submit/subscribe
//! interface.

pub mod engine;
pub mod events;
pub mod log;
pub mod rules;
pub mod state;

pub use engine::{ConversationEngine, SubmitOutcome};
pub use events::ConversationEvent;
pub use log::ConversationLog;
pub use rules::{match_rule, select_reply, ReplyRule, FALLBACK_REPLY, REPLY_RULES};
pub use state::{ExchangeState, StateMachine};
