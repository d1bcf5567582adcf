//! # Store
//!
//! Owns the current `NavigationState` cell and replaces it on every dispatch.
//! Actions are applied strictly in the order they arrive.

use std::sync::Arc;

use log::debug;

use crate::core::action::{Action, reduce};
use crate::core::state::NavigationState;

/// What a dispatch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    /// The action had nothing to act on; the state is the same instance.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<NavigationState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(NavigationState::default())
    }
}

impl Store {
    pub fn new(initial: NavigationState) -> Self {
        Self {
            state: Arc::new(initial),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let next = reduce(&self.state, &action);
        if Arc::ptr_eq(&next, &self.state) {
            debug!("Dispatch {:?}: unchanged", action);
            return Outcome::Unchanged;
        }
        debug!(
            "Dispatch {:?}: screen={:?} module={:?} example={:?}",
            action, next.screen, next.active_module_key, next.active_module_example_key
        );
        self.state = next;
        Outcome::Changed
    }
}
