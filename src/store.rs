//! Owned calculator state
//!
//! The presentation layer holds one `Store` and pushes every action through
//! `dispatch`, in the order its event source delivers them.

use crate::calc::{Action, CalculatorState, reduce};
use crate::view::DisplayText;

#[derive(Debug, Default)]
pub struct Store {
    state: CalculatorState,
    /// Actions applied so far, no-ops included
    dispatched: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply one action. Returns true if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatched += 1;
        let next = reduce(&self.state, action);
        if next == self.state {
            log::trace!("#{} {:?}: no-op", self.dispatched, action);
            return false;
        }

        if log::log_enabled!(log::Level::Debug) {
            let snapshot = serde_json::to_string(&next).unwrap_or_default();
            log::debug!("#{} {:?} -> {}", self.dispatched, action, snapshot);
        }
        self.state = next;
        true
    }

    pub fn display(&self) -> DisplayText {
        DisplayText::from_state(&self.state)
    }
}
