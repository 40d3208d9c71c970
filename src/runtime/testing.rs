//! Mock implementations for testing
//!
//! These mocks enable integration testing without real I/O.

#![allow(dead_code)]

use super::{ConversationEngine, ConversationRuntime};
use crate::dispatch::{DispatchError, MessageDispatcher, OutboundMessage};
use crate::quote::{PriceQuoteCache, QuoteError, QuoteSource};
use crate::session::InMemorySessionStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

// ============================================================================
// Mock Quote Source
// ============================================================================

/// Quote source that returns queued results
pub struct MockQuoteSource {
    responses: Mutex<VecDeque<Result<f64, QuoteError>>>,
    fetches: AtomicUsize,
    delay: Duration,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Source whose fetches take `delay` before answering
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fetches: AtomicUsize::new(0),
            delay,
        }
    }

    /// Queue a successful price
    pub fn queue_quote(&self, price: f64) {
        self.responses.lock().unwrap().push_back(Ok(price));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: QuoteError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_quote(&self) -> Result<f64, QuoteError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QuoteError::network("No mock quote queued")))
    }

    fn currency(&self) -> &str {
        "INR"
    }
}

// ============================================================================
// Gated Quote Source
// ============================================================================

/// Quote source that blocks each fetch until released
///
/// Lets a test suspend one turn mid-flight while another runs.
pub struct GatedQuoteSource {
    price: f64,
    /// Signalled when a fetch starts waiting
    pub entered: Notify,
    /// Signal to let the waiting fetch return
    pub release: Notify,
}

impl GatedQuoteSource {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl QuoteSource for GatedQuoteSource {
    async fn fetch_quote(&self) -> Result<f64, QuoteError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.price)
    }

    fn currency(&self) -> &str {
        "INR"
    }
}

// ============================================================================
// Mock Dispatcher
// ============================================================================

/// One recorded send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: String,
    pub user_id: String,
    pub message: OutboundMessage,
}

/// Dispatcher that records messages instead of sending them
pub struct MockDispatcher {
    sent: Mutex<Vec<SentMessage>>,
    fail: AtomicBool,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent send fail
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Drain recorded messages
    pub fn take(&self) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .unwrap()
            .drain(..)
            .map(|s| s.message)
            .collect()
    }
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageDispatcher for MockDispatcher {
    async fn send(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &OutboundMessage,
    ) -> Result<(), DispatchError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DispatchError::Rejected {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        self.sent.lock().unwrap().push(SentMessage {
            channel_id: channel_id.to_string(),
            user_id: user_id.to_string(),
            message: message.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Runtime wired to in-memory mocks
pub struct TestHarness {
    pub runtime: Arc<ConversationRuntime>,
    pub store: Arc<InMemorySessionStore>,
    pub dispatcher: Arc<MockDispatcher>,
}

impl TestHarness {
    pub fn new(quotes: Arc<dyn QuoteSource>) -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        let dispatcher = Arc::new(MockDispatcher::new());
        let engine = ConversationEngine::new(Arc::new(PriceQuoteCache::new(quotes)));
        let runtime = Arc::new(ConversationRuntime::new(
            store.clone(),
            dispatcher.clone(),
            engine,
        ));
        Self {
            runtime,
            store,
            dispatcher,
        }
    }

    /// Harness whose quote source answers `price` for every fetch
    pub fn with_price(price: f64) -> Self {
        let source = Arc::new(MockQuoteSource::new());
        for _ in 0..16 {
            source.queue_quote(price);
        }
        Self::new(source)
    }
}
