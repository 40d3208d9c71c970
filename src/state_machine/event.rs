//! Inbound events

/// What the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Free text
    Text { body: String },
    /// Row picked from a list message
    ListSelection { id: String },
    /// Reply button pressed
    ButtonSelection { id: String },
}

impl Event {
    pub fn text(body: impl Into<String>) -> Self {
        Event::Text { body: body.into() }
    }

    pub fn list(id: impl Into<String>) -> Self {
        Event::ListSelection { id: id.into() }
    }

    pub fn button(id: impl Into<String>) -> Self {
        Event::ButtonSelection { id: id.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Text { .. } => "text",
            Event::ListSelection { .. } => "list_selection",
            Event::ButtonSelection { .. } => "button_selection",
        }
    }
}

/// An event together with its routing metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Channel's stable user id (the sender's phone number on WhatsApp)
    pub user_id: String,
    /// Business channel the event arrived on; replies go out through it
    pub channel_id: String,
    pub event: Event,
}
