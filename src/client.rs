//! High-level client: `RwaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::{BrokerCredentials, TradingMode};
use crate::domain::market::client::Market;
use crate::domain::order::client::Orders;
use crate::domain::price::client::Prices;
use crate::error::SettlementError;
use crate::http::client::DEFAULT_TIMEOUT_SECS;
use crate::http::RwaHttp;
use crate::settlement::SettlementAdapter;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Market as MarketClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for the settlement adapter.
///
/// Provides nested sub-client accessors for each upstream:
/// `client.market()`, `client.prices()`, `client.orders()`, and the
/// end-to-end `client.settlement()`.
#[derive(Debug, Clone)]
pub struct RwaClient {
    pub(crate) http: RwaHttp,
    pub(crate) trading_mode: TradingMode,
}

impl RwaClient {
    pub fn builder() -> RwaClientBuilder {
        RwaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn settlement(&self) -> SettlementAdapter<'_> {
        SettlementAdapter { client: self }
    }

    pub fn trading_mode(&self) -> TradingMode {
        self.trading_mode
    }

    pub fn broker_url(&self) -> &str {
        self.http.broker_url()
    }

    pub fn price_feed_url(&self) -> &str {
        self.http.price_feed_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RwaClientBuilder {
    credentials: Option<BrokerCredentials>,
    trading_mode: TradingMode,
    broker_url: Option<String>,
    price_feed_url: String,
    timeout: Duration,
}

impl Default for RwaClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            trading_mode: TradingMode::default(),
            broker_url: None,
            price_feed_url: crate::network::DEFAULT_PRICE_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RwaClientBuilder {
    /// Brokerage API key pair. Required.
    pub fn credentials(mut self, credentials: BrokerCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Paper (default) or live brokerage environment.
    pub fn trading_mode(mut self, mode: TradingMode) -> Self {
        self.trading_mode = mode;
        self
    }

    /// Override the brokerage base URL. Takes precedence over the trading
    /// mode's URL.
    pub fn broker_url(mut self, url: &str) -> Self {
        self.broker_url = Some(url.to_string());
        self
    }

    pub fn price_feed_url(mut self, url: &str) -> Self {
        self.price_feed_url = url.to_string();
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RwaClient, SettlementError> {
        let credentials = self
            .credentials
            .filter(BrokerCredentials::is_complete)
            .ok_or_else(|| {
                SettlementError::Config("brokerage API key and secret are required".to_string())
            })?;

        let broker_url = self
            .broker_url
            .unwrap_or_else(|| self.trading_mode.base_url().to_string());

        let http = RwaHttp::new(&broker_url, &self.price_feed_url, credentials, self.timeout)
            .map_err(|e| SettlementError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(RwaClient {
            http,
            trading_mode: self.trading_mode,
        })
    }
}
