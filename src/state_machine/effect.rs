//! Effects produced by state transitions

use crate::catalog::MenuContent;
use crate::dispatch::OutboundMessage;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver a message to the user
    SendMessage(OutboundMessage),

    /// User confirmed an order
    OrderPlaced {
        order_id: String,
        product: String,
        quantity: u32,
    },

    /// User cancelled at the confirmation step
    OrderCancelled { product: String, quantity: u32 },
}

impl Effect {
    pub fn text(body: impl Into<String>) -> Self {
        Effect::SendMessage(OutboundMessage::text(body))
    }

    pub fn menu(menu: &MenuContent) -> Self {
        Effect::SendMessage(menu.to_message())
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&OutboundMessage> {
        match self {
            Effect::SendMessage(message) => Some(message),
            _ => None,
        }
    }
}
