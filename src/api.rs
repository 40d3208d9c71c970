//! HTTP API: WhatsApp webhook endpoints

mod handlers;
mod signature;
mod types;

pub use handlers::create_router;

use crate::config::WhatsAppConfig;
use crate::runtime::ConversationRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<ConversationRuntime>,
    /// Expected `hub.verify_token`; verification is refused when unset
    pub verify_token: Option<String>,
    /// Signature checks are skipped when unset
    pub app_secret: Option<String>,
}

impl AppState {
    pub fn new(runtime: Arc<ConversationRuntime>, whatsapp: &WhatsAppConfig) -> Self {
        Self {
            runtime,
            verify_token: whatsapp.verify_token.clone(),
            app_secret: whatsapp.app_secret.clone(),
        }
    }
}
