//! API request and response types

use crate::state_machine::{Event, InboundEvent};
use serde::{Deserialize, Serialize};

// ============================================================
// Webhook verification
// ============================================================

/// Query string of the `GET /webhook` handshake
#[derive(Debug, Default, Deserialize)]
pub struct VerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

// ============================================================
// Webhook notifications
// ============================================================

/// Body of a `POST /webhook` notification
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookChange {
    #[serde(default)]
    pub value: ChangeValue,
}

/// Status callbacks arrive here too, with no `messages`
#[derive(Debug, Default, Deserialize)]
pub struct ChangeValue {
    pub metadata: Option<ChangeMetadata>,
    #[serde(default)]
    pub messages: Vec<WebhookMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangeMetadata {
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookMessage {
    pub from: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub text: Option<TextContent>,
    pub interactive: Option<InteractiveContent>,
    /// Quick-reply button on a template message
    pub button: Option<QuickReplyContent>,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct InteractiveContent {
    pub list_reply: Option<ReplyContent>,
    pub button_reply: Option<ReplyContent>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyContent {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct QuickReplyContent {
    pub payload: String,
}

impl WebhookMessage {
    /// The conversation event this message carries, if its type is handled
    pub fn to_event(&self) -> Option<Event> {
        match self.kind.as_str() {
            "text" => self.text.as_ref().map(|t| Event::text(&t.body)),
            "interactive" => {
                let interactive = self.interactive.as_ref()?;
                if let Some(reply) = &interactive.list_reply {
                    Some(Event::list(&reply.id))
                } else {
                    interactive
                        .button_reply
                        .as_ref()
                        .map(|reply| Event::button(&reply.id))
                }
            }
            "button" => self.button.as_ref().map(|b| Event::button(&b.payload)),
            _ => None,
        }
    }
}

impl WebhookPayload {
    /// Flatten into routable events, in delivery order
    ///
    /// Messages missing the sender or the receiving phone number id are
    /// dropped with a warning. Unsupported message types are ignored.
    pub fn into_inbound_events(self) -> Vec<InboundEvent> {
        let mut events = Vec::new();

        for change in self.entry.into_iter().flat_map(|e| e.changes) {
            let channel_id = change
                .value
                .metadata
                .and_then(|m| m.phone_number_id)
                .filter(|id| !id.is_empty());

            for message in change.value.messages {
                let user_id = message.from.clone().filter(|from| !from.is_empty());
                let (Some(user_id), Some(channel_id)) = (user_id, channel_id.clone()) else {
                    tracing::warn!(
                        kind = %message.kind,
                        has_from = message.from.is_some(),
                        has_phone_number_id = channel_id.is_some(),
                        "Dropping message without routing metadata"
                    );
                    continue;
                };

                let Some(event) = message.to_event() else {
                    tracing::debug!(kind = %message.kind, "Ignoring unsupported message type");
                    continue;
                };

                events.push(InboundEvent {
                    user_id,
                    channel_id,
                    event,
                });
            }
        }

        events
    }
}

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookAck {
    /// Events run through the conversation engine
    pub processed: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
