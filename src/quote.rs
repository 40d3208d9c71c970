//! Commodity price quotes
//!
//! A [`QuoteSource`] fetches the current unit price; [`PriceQuoteCache`]
//! keeps one quote for an hour so conversations don't hit the provider on
//! every turn.

mod cache;
mod error;
mod metals;

pub use cache::{PriceQuote, PriceQuoteCache};
pub use error::QuoteError;
pub use metals::MetalsApiSource;

use async_trait::async_trait;
use std::sync::Arc;

/// External price provider
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the current price per gram
    async fn fetch_quote(&self) -> Result<f64, QuoteError>;

    /// Currency the price is quoted in
    fn currency(&self) -> &str;
}

/// Logging wrapper for quote sources
pub struct LoggingQuoteSource {
    inner: Arc<dyn QuoteSource>,
}

impl LoggingQuoteSource {
    pub fn new(inner: Arc<dyn QuoteSource>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl QuoteSource for LoggingQuoteSource {
    async fn fetch_quote(&self) -> Result<f64, QuoteError> {
        let start = std::time::Instant::now();
        let result = self.inner.fetch_quote().await;
        let duration = start.elapsed();

        match &result {
            Ok(price) => {
                tracing::info!(
                    currency = %self.inner.currency(),
                    price,
                    duration_ms = %duration.as_millis(),
                    "Quote fetched"
                );
            }
            Err(e) => {
                tracing::error!(
                    currency = %self.inner.currency(),
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = ?e.kind,
                    "Quote fetch failed"
                );
            }
        }

        result
    }

    fn currency(&self) -> &str {
        self.inner.currency()
    }
}
