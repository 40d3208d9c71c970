//! goldchat - WhatsApp ordering bot for a jewellery store
//!
//! Guides each user through a menu-driven conversation, quoting the live
//! gold rate and collecting orders.

mod api;
mod catalog;
mod config;
mod dispatch;
mod quote;
mod runtime;
mod session;
mod state_machine;

use api::{create_router, AppState};
use config::Config;
use dispatch::WhatsAppDispatcher;
use quote::{LoggingQuoteSource, MetalsApiSource, PriceQuoteCache};
use runtime::{ConversationEngine, ConversationRuntime};
use session::InMemorySessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goldchat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env();

    if config.whatsapp.access_token.is_none() {
        tracing::warn!("WHATSAPP_TOKEN not set; outbound messages will be rejected");
    }
    if config.whatsapp.verify_token.is_none() {
        tracing::warn!("WHATSAPP_VERIFY_TOKEN not set; webhook verification disabled");
    }
    if config.whatsapp.app_secret.is_none() {
        tracing::warn!("WHATSAPP_APP_SECRET not set; webhook signatures not checked");
    }
    if config.quote.api_key.is_none() {
        tracing::warn!("QUOTE_API_KEY not set; rates will be unavailable");
    }

    // Quote pipeline
    let source = MetalsApiSource::new(&config.quote)?;
    let quotes = Arc::new(PriceQuoteCache::new(Arc::new(LoggingQuoteSource::new(
        Arc::new(source),
    ))));
    tracing::info!(currency = %config.quote.currency, "Quote cache initialized");

    // Conversation runtime
    let dispatcher = WhatsAppDispatcher::new(&config.whatsapp)?;
    let runtime = Arc::new(ConversationRuntime::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(dispatcher),
        ConversationEngine::new(quotes),
    ));

    let state = AppState::new(runtime, &config.whatsapp);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("goldchat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
