//! WhatsApp Cloud API dispatcher

use super::{DispatchError, MessageDispatcher, OutboundMessage};
use crate::config::WhatsAppConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Sends messages through `POST {graph}/{version}/{phone_number_id}/messages`
pub struct WhatsAppDispatcher {
    client: Client,
    base_url: String,
    access_token: String,
}

impl WhatsAppDispatcher {
    pub fn new(config: &WhatsAppConfig) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DispatchError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: format!(
                "{}/{}",
                config.graph_url.trim_end_matches('/'),
                config.api_version
            ),
            access_token: config.access_token.clone().unwrap_or_default(),
        })
    }

    fn messages_url(&self, channel_id: &str) -> String {
        format!("{}/{channel_id}/messages", self.base_url)
    }
}

#[async_trait]
impl MessageDispatcher for WhatsAppDispatcher {
    async fn send(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &OutboundMessage,
    ) -> Result<(), DispatchError> {
        let request = SendRequest::new(user_id, message);

        let response = self
            .client
            .post(self.messages_url(channel_id))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DispatchError::Transport(format!("Request timeout: {e}"))
                } else {
                    DispatchError::Transport(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(user_id = %user_id, kind = message.kind(), "Message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

// WhatsApp Cloud API types

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: &'a str,
    #[serde(flatten)]
    body: SendBody<'a>,
}

impl<'a> SendRequest<'a> {
    fn new(to: &'a str, message: &'a OutboundMessage) -> Self {
        let body = match message {
            OutboundMessage::Text { body } => SendBody::Text {
                text: TextPayload {
                    preview_url: false,
                    body,
                },
            },
            OutboundMessage::List(list) => SendBody::Interactive {
                interactive: Interactive::List {
                    header: Header::text(&list.header),
                    body: Body {
                        text: &list.body_text,
                    },
                    action: ListAction {
                        button: &list.button_label,
                        sections: list
                            .sections
                            .iter()
                            .map(|s| Section {
                                title: &s.title,
                                rows: s
                                    .rows
                                    .iter()
                                    .map(|r| Row {
                                        id: &r.id,
                                        title: &r.title,
                                        description: (!r.description.is_empty())
                                            .then_some(r.description.as_str()),
                                    })
                                    .collect(),
                            })
                            .collect(),
                    },
                },
            },
            OutboundMessage::Buttons(buttons) => SendBody::Interactive {
                interactive: Interactive::Button {
                    header: Header::text(&buttons.header),
                    body: Body {
                        text: &buttons.body_text,
                    },
                    action: ButtonAction {
                        buttons: buttons
                            .buttons
                            .iter()
                            .map(|b| Button {
                                kind: "reply",
                                reply: Reply {
                                    id: &b.id,
                                    title: &b.title,
                                },
                            })
                            .collect(),
                    },
                },
            },
        };

        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SendBody<'a> {
    Text { text: TextPayload<'a> },
    Interactive { interactive: Interactive<'a> },
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    preview_url: bool,
    body: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Interactive<'a> {
    List {
        header: Header<'a>,
        body: Body<'a>,
        action: ListAction<'a>,
    },
    Button {
        header: Header<'a>,
        body: Body<'a>,
        action: ButtonAction<'a>,
    },
}

#[derive(Debug, Serialize)]
struct Header<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

impl<'a> Header<'a> {
    fn text(text: &'a str) -> Self {
        Self { kind: "text", text }
    }
}

#[derive(Debug, Serialize)]
struct Body<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct ListAction<'a> {
    button: &'a str,
    sections: Vec<Section<'a>>,
}

#[derive(Debug, Serialize)]
struct Section<'a> {
    title: &'a str,
    rows: Vec<Row<'a>>,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ButtonAction<'a> {
    buttons: Vec<Button<'a>>,
}

#[derive(Debug, Serialize)]
struct Button<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    reply: Reply<'a>,
}

#[derive(Debug, Serialize)]
struct Reply<'a> {
    id: &'a str,
    title: &'a str,
}
