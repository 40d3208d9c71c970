//! Single-value price cache with a fixed time-to-live

use super::QuoteSource;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

/// Quotes older than this are refreshed before use
pub const QUOTE_TTL: Duration = Duration::from_secs(3600);

/// A fetched commodity price
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Price per gram, always positive
    pub value: f64,
    /// ISO 4217 code of `value`
    pub currency: String,
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        chrono::Duration::from_std(ttl).is_ok_and(|ttl| age < ttl)
    }

    /// Render an amount in this quote's currency, e.g. `INR 4000.00`
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {amount:.2}", self.currency)
    }
}

/// Caches the latest quote from a [`QuoteSource`].
///
/// A failed refresh yields `None` even when an expired quote is still held;
/// stale prices are never served. Only one refresh is in flight at a time;
/// callers that miss while it runs wait for its result.
pub struct PriceQuoteCache {
    source: Arc<dyn QuoteSource>,
    ttl: Duration,
    cached: RwLock<Option<PriceQuote>>,
    refresh: Mutex<()>,
}

impl PriceQuoteCache {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self::with_ttl(source, QUOTE_TTL)
    }

    pub fn with_ttl(source: Arc<dyn QuoteSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cached: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Current quote, refreshing it if expired. `None` means unavailable.
    pub async fn get(&self) -> Option<PriceQuote> {
        if let Some(quote) = self.fresh().await {
            return Some(quote);
        }

        let _refresh = self.refresh.lock().await;
        // Another caller may have refreshed while we waited
        if let Some(quote) = self.fresh().await {
            return Some(quote);
        }

        match self.source.fetch_quote().await {
            Ok(value) if value.is_finite() && value > 0.0 => {
                let quote = PriceQuote {
                    value,
                    currency: self.source.currency().to_string(),
                    fetched_at: Utc::now(),
                };
                *self.cached.write().await = Some(quote.clone());
                Some(quote)
            }
            Ok(value) => {
                tracing::warn!(value, "Quote source returned a non-positive price");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = ?e.kind, "Quote refresh failed, rate unavailable");
                None
            }
        }
    }

    async fn fresh(&self) -> Option<PriceQuote> {
        self.cached
            .read()
            .await
            .as_ref()
            .filter(|quote| quote.is_fresh(Utc::now(), self.ttl))
            .cloned()
    }
}
