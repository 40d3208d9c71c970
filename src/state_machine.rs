//! Core conversation state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.
//! The quote and order id arrive through [`TurnContext`], so a transition
//! never performs I/O.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Event, InboundEvent};
pub use state::ConvState;
pub use transition::{quote_required, transition, TurnContext};
