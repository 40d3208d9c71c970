//! GoldAPI-style spot price provider

use super::{QuoteError, QuoteSource};
use crate::config::QuoteConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Fetches the 24k gold price per gram from `GET {base_url}/XAU/{currency}`
pub struct MetalsApiSource {
    client: Client,
    url: String,
    api_key: Option<String>,
    currency: String,
}

impl MetalsApiSource {
    pub fn new(config: &QuoteConfig) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| QuoteError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: format!(
                "{}/XAU/{}",
                config.base_url.trim_end_matches('/'),
                config.currency
            ),
            api_key: config.api_key.clone(),
            currency: config.currency.clone(),
        })
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> QuoteError {
        match status.as_u16() {
            401 | 403 => QuoteError::auth(format!("Authentication failed: {body}")),
            429 => QuoteError::rate_limit(format!("Rate limited: {body}")),
            500..=599 => QuoteError::server_error(format!("Server error: {body}")),
            _ => QuoteError::unknown(format!("HTTP {status}: {body}")),
        }
    }
}

/// Extract the per-gram price from a response body
fn parse_price(body: &str) -> Result<f64, QuoteError> {
    let parsed: MetalsResponse = serde_json::from_str(body)
        .map_err(|e| QuoteError::invalid_response(format!("Failed to parse response: {e}")))?;

    match parsed.price_gram_24k {
        Some(price) if price.is_finite() && price > 0.0 => Ok(price),
        Some(price) => Err(QuoteError::invalid_response(format!(
            "Non-positive price: {price}"
        ))),
        None => Err(QuoteError::invalid_response(
            parsed
                .error
                .unwrap_or_else(|| "Response has no price_gram_24k".to_string()),
        )),
    }
}

#[async_trait]
impl QuoteSource for MetalsApiSource {
    async fn fetch_quote(&self) -> Result<f64, QuoteError> {
        let mut request = self.client.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header("x-access-token", key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteError::network(format!("Request timeout: {e}"))
            } else if e.is_connect() {
                QuoteError::network(format!("Connection failed: {e}"))
            } else {
                QuoteError::unknown(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        parse_price(&body)
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

#[derive(Debug, Deserialize)]
struct MetalsResponse {
    price_gram_24k: Option<f64>,
    error: Option<String>,
}
