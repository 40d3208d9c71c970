//! Channel-neutral outbound messages

/// A message the conversation wants delivered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text { body: String },
    List(ListMessage),
    Buttons(ButtonMessage),
}

impl OutboundMessage {
    pub fn text(body: impl Into<String>) -> Self {
        OutboundMessage::Text { body: body.into() }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::Text { .. } => "text",
            OutboundMessage::List(_) => "list",
            OutboundMessage::Buttons(_) => "buttons",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMessage {
    pub header: String,
    pub body_text: String,
    pub button_label: String,
    pub sections: Vec<ListSection>,
}

impl ListMessage {
    /// All row ids across sections, in display order
    #[cfg(test)]
    pub fn row_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter().map(|r| r.id.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMessage {
    pub header: String,
    pub body_text: String,
    pub buttons: Vec<ReplyButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyButton {
    pub id: String,
    pub title: String,
}

impl ReplyButton {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
