//! Runtime for processing inbound events
//!
//! Each event runs get, advance, set, then dispatch. The new session is
//! written before any message is sent, so a delivery failure never loses a
//! state change. There is no per-user serialization: overlapping events for
//! one user race, and the last write wins.

mod engine;

#[cfg(test)]
pub mod testing;

pub use engine::ConversationEngine;

use crate::dispatch::{DispatchError, MessageDispatcher};
use crate::session::{Session, SessionStore, StoreError};
use crate::state_machine::InboundEvent;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Routes inbound events through the engine
pub struct ConversationRuntime {
    store: Arc<dyn SessionStore>,
    dispatcher: Arc<dyn MessageDispatcher>,
    engine: ConversationEngine,
}

impl ConversationRuntime {
    pub fn new(
        store: Arc<dyn SessionStore>,
        dispatcher: Arc<dyn MessageDispatcher>,
        engine: ConversationEngine,
    ) -> Self {
        Self {
            store,
            dispatcher,
            engine,
        }
    }

    /// Process one event and return the session it produced
    pub async fn handle(&self, inbound: InboundEvent) -> Result<Session, RuntimeError> {
        let InboundEvent {
            user_id,
            channel_id,
            event,
        } = inbound;

        let session = self.store.get(&user_id).await?;
        let advance = self.engine.advance(&user_id, &session, event).await;
        self.store.set(&user_id, advance.session.clone()).await?;

        for message in &advance.messages {
            if let Err(e) = self.dispatcher.send(&channel_id, &user_id, message).await {
                tracing::error!(
                    user_id = %user_id,
                    kind = message.kind(),
                    error = %e,
                    "Failed to dispatch message"
                );
                return Err(e.into());
            }
        }

        Ok(advance.session)
    }
}
