//! Per-user conversation records
//!
//! The store is the only shared mutable state. Reads and writes are separate
//! calls, so two events for the same user processed concurrently can
//! overwrite each other's update.

use crate::catalog::Language;
use crate::state_machine::ConvState;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// One user's conversation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub state: ConvState,
    pub language: Language,
}

impl Session {
    /// Same session in a different state; language is kept
    #[must_use]
    pub fn with_state(&self, state: ConvState) -> Self {
        Self {
            state,
            language: self.language,
        }
    }

    /// Product chosen for the order in progress
    pub fn selected_product(&self) -> Option<&str> {
        match &self.state {
            ConvState::EnterQuantity { product } | ConvState::ConfirmOrder { product, .. } => {
                Some(product)
            }
            _ => None,
        }
    }

    /// Quantity entered for the order in progress
    pub fn quantity(&self) -> Option<u32> {
        match &self.state {
            ConvState::ConfirmOrder { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(e: PoisonError<T>) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Keyed session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Session for `user_id`, or a fresh default session if none exists
    async fn get(&self, user_id: &str) -> Result<Session, StoreError>;

    async fn set(&self, user_id: &str, session: Session) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn get(&self, user_id: &str) -> Result<Session, StoreError> {
        (**self).get(user_id).await
    }

    async fn set(&self, user_id: &str, session: Session) -> Result<(), StoreError> {
        (**self).set(user_id, session).await
    }
}

/// Process-lifetime store. Sessions are never evicted.
///
/// The lock is never held across an await. A writer that panicked leaves it
/// poisoned, and every later call fails with [`StoreError::Unavailable`].
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Result<Session, StoreError> {
        Ok(self
            .sessions
            .read()?
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set(&self, user_id: &str, session: Session) -> Result<(), StoreError> {
        self.sessions.write()?.insert(user_id.to_string(), session);
        Ok(())
    }
}
