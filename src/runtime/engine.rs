//! One conversation turn: quote lookup, transition, effect interpretation

use crate::dispatch::OutboundMessage;
use crate::quote::PriceQuoteCache;
use crate::session::Session;
use crate::state_machine::{quote_required, transition, Effect, Event, TurnContext};
use rand::Rng;
use std::sync::Arc;

const ORDER_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_ID_LEN: usize = 8;

/// Outcome of one turn
#[derive(Debug)]
pub struct Advance {
    pub session: Session,
    /// Messages to deliver, in order
    pub messages: Vec<OutboundMessage>,
}

/// Supplies the impure inputs a transition needs and interprets its effects
pub struct ConversationEngine {
    quotes: Arc<PriceQuoteCache>,
}

impl ConversationEngine {
    pub fn new(quotes: Arc<PriceQuoteCache>) -> Self {
        Self { quotes }
    }

    pub async fn advance(&self, user_id: &str, session: &Session, event: Event) -> Advance {
        let quote = if quote_required(&session.state, &event) {
            self.quotes.get().await
        } else {
            None
        };
        let ctx = TurnContext::new(quote, generate_order_id());

        let event_kind = event.kind();
        let result = transition(session, &ctx, event);

        tracing::info!(
            user_id,
            from = session.state.name(),
            to = result.new_session.state.name(),
            event = event_kind,
            language = result.new_session.language.code(),
            product = result.new_session.selected_product(),
            quantity = result.new_session.quantity(),
            "State transition"
        );

        let mut messages = Vec::new();
        for effect in result.effects {
            match effect {
                Effect::SendMessage(message) => messages.push(message),
                Effect::OrderPlaced {
                    order_id,
                    product,
                    quantity,
                } => {
                    tracing::info!(user_id, %order_id, %product, quantity, "Order placed");
                }
                Effect::OrderCancelled { product, quantity } => {
                    tracing::info!(user_id, %product, quantity, "Order cancelled");
                }
            }
        }

        Advance {
            session: result.new_session,
            messages,
        }
    }
}

/// `ORD-` followed by 8 upper-case alphanumerics
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_ID_LEN)
        .map(|_| char::from(ORDER_ID_CHARSET[rng.gen_range(0..ORDER_ID_CHARSET.len())]))
        .collect();
    format!("ORD-{suffix}")
}
