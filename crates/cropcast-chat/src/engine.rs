//! Conversation engine: owns the message log and produces assistant replies.
//!
//! `submit` appends the user message synchronously and schedules the
//! assistant reply on a spawned task that sleeps for the configured delay,
//! so callers must be inside a Tokio runtime. At most one reply is in flight
//! at a time; submissions made while one is pending are dropped, as is empty
//! input. Neither case surfaces an error.
//!
//! There is no cancellation: a scheduled reply always completes. The reply
//! task holds its own handle to the shared log, so dropping every other
//! engine handle does not abort delivery.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use cropcast_core::config::ChatConfig;
use cropcast_core::types::Message;

use crate::events::ConversationEvent;
use crate::log::ConversationLog;
use crate::rules;
use crate::state::{ExchangeState, StateMachine};

/// Capacity of the event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// What happened to a call to [`ConversationEngine::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user message was appended and a reply is on its way.
    Accepted,
    /// The input was empty after trimming; nothing was appended.
    IgnoredEmpty,
    /// A reply is already pending; the submission was dropped.
    IgnoredBusy,
}

/// The conversation engine behind the assistant chat window.
///
/// All fields are shared handles, so cloning yields another view of the same
/// conversation (the pattern used for state shared across tasks).
#[derive(Clone)]
pub struct ConversationEngine {
    log: Arc<Mutex<ConversationLog>>,
    exchange: StateMachine,
    event_tx: broadcast::Sender<ConversationEvent>,
    reply_delay: Duration,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}

impl ConversationEngine {
    /// Create an engine whose log is seeded with the configured greeting.
    pub fn new(config: ChatConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        info!(reply_delay_ms = config.reply_delay_ms, "Conversation engine ready");
        Self {
            log: Arc::new(Mutex::new(ConversationLog::with_greeting(&config.greeting))),
            exchange: StateMachine::new(),
            event_tx,
            reply_delay: Duration::from_millis(config.reply_delay_ms),
        }
    }

    /// Submit raw user input.
    ///
    /// Appends a user message immediately, then schedules exactly one
    /// assistant reply for delivery after the configured delay. The text is
    /// stored as submitted; trimming applies only to the emptiness check.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::IgnoredEmpty;
        }

        // Busy gate: the check and the flip to AwaitingReply are one atomic
        // transition, so concurrent submitters race for a single slot.
        if self.exchange.transition(ExchangeState::AwaitingReply).is_err() {
            debug!("Ignoring submission while a reply is pending");
            return SubmitOutcome::IgnoredBusy;
        }

        let message = Message::user(text.to_string());
        {
            let mut log = self.log.lock().expect("log mutex poisoned");
            log.append(message.clone());
        }
        let _ = self.event_tx.send(ConversationEvent::PendingChanged { pending: true });
        let _ = self.event_tx.send(ConversationEvent::MessageAppended { message });

        let (rule_name, reply) = match rules::match_rule(text) {
            Some(rule) => (rule.name, rule.reply),
            None => ("fallback", rules::FALLBACK_REPLY),
        };
        debug!(rule = rule_name, chars = text.len(), "User message accepted");

        let engine = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(engine.reply_delay).await;
            engine.deliver_reply(reply);
        });

        SubmitOutcome::Accepted
    }

    /// Snapshot of the log, in display order.
    pub fn messages(&self) -> Vec<Message> {
        self.log
            .lock()
            .expect("log mutex poisoned")
            .messages()
            .to_vec()
    }

    /// Number of messages in the log.
    pub fn message_count(&self) -> usize {
        self.log.lock().expect("log mutex poisoned").len()
    }

    /// Whether an assistant reply is currently pending.
    pub fn is_pending(&self) -> bool {
        self.exchange.current() == ExchangeState::AwaitingReply
    }

    /// Subscribe to conversation events.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.event_tx.subscribe()
    }

    /// Append the assistant reply and close out the exchange.
    fn deliver_reply(&self, reply: &'static str) {
        let message = Message::assistant(reply.to_string());
        {
            let mut log = self.log.lock().expect("log mutex poisoned");
            log.append(message.clone());
        }
        let _ = self.event_tx.send(ConversationEvent::MessageAppended { message });
        let _ = self.event_tx.send(ConversationEvent::PendingChanged { pending: false });
        // The flip to Idle reopens the submit gate, so it comes last: the
        // reply is in the log and the closing events are on the channel
        // before the next exchange can start publishing.
        if let Err(e) = self.exchange.transition(ExchangeState::Idle) {
            warn!(error = %e, "Exchange state out of sync after reply");
        }
        debug!("Assistant reply appended");
    }
}

// =============================================================================
// Tests
// =============================================================================
