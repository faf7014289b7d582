//! Per-exchange state machine for the conversation engine.
//!
//! Each exchange walks a two-state cycle:
//! - Idle -> AwaitingReply (user input accepted)
//! - AwaitingReply -> Idle (assistant reply appended)
//!
//! There is no terminal state; the machine is re-entered on every exchange.

use std::fmt;
use std::sync::{Arc, Mutex};

use cropcast_core::error::CropcastError;

/// Exchange progress of the conversation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeState {
    /// No reply outstanding. Submissions are accepted.
    Idle,
    /// A reply to the last user message is on its way. Submissions are dropped.
    AwaitingReply,
}

impl fmt::Display for ExchangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeState::Idle => write!(f, "Idle"),
            ExchangeState::AwaitingReply => write!(f, "AwaitingReply"),
        }
    }
}

impl ExchangeState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &ExchangeState) -> bool {
        matches!(
            (self, target),
            (ExchangeState::Idle, ExchangeState::AwaitingReply)
                | (ExchangeState::AwaitingReply, ExchangeState::Idle)
        )
    }
}

/// Thread-safe state machine for exchange transitions.
///
/// Wraps `ExchangeState` in an `Arc<Mutex<>>` to allow safe concurrent
/// access. The validity check and the update happen under one lock, so
/// concurrent submitters race for at most one successful transition.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: Arc<Mutex<ExchangeState>>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine initialized to `Idle`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ExchangeState::Idle)),
        }
    }

    /// Returns the current state.
    pub fn current(&self) -> ExchangeState {
        *self.state.lock().expect("state mutex poisoned")
    }

    /// Attempt to transition to the target state.
    ///
    /// Returns `Ok(())` if the transition is valid, or a
    /// `CropcastError::Conversation` if it is not allowed from the current
    /// state.
    pub fn transition(&self, target: ExchangeState) -> Result<(), CropcastError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if state.can_transition_to(&target) {
            tracing::debug!("Exchange state: {} -> {}", *state, target);
            *state = target;
            Ok(())
        } else {
            Err(CropcastError::Conversation(format!(
                "Invalid exchange transition: {} -> {}",
                *state, target
            )))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
