//! Outbound message delivery
//!
//! The conversation core only depends on [`MessageDispatcher`]; the WhatsApp
//! Cloud API client is the production implementation.

mod message;
mod whatsapp;

pub use message::{ButtonMessage, ListMessage, ListRow, ListSection, OutboundMessage, ReplyButton};
pub use whatsapp::WhatsAppDispatcher;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Delivery failure
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request never got a response (DNS, connect, timeout)
    #[error("transport error: {0}")]
    Transport(String),
    /// The channel answered with a non-success status
    #[error("channel rejected message with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    /// Client could not be constructed
    #[error("dispatcher misconfigured: {0}")]
    Config(String),
}

/// Delivers a composed message to one user on one channel
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &OutboundMessage,
    ) -> Result<(), DispatchError>;
}

#[async_trait]
impl<T: MessageDispatcher + ?Sized> MessageDispatcher for Arc<T> {
    async fn send(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &OutboundMessage,
    ) -> Result<(), DispatchError> {
        (**self).send(channel_id, user_id, message).await
    }
}
