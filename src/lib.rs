//! # RWA settlement adapter
//!
//! Settles a real-world-asset mint request by buying the asset at a
//! brokerage and reporting the filled quantity as an oracle `uint256`.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: newtypes, decimal scaling, domain models (always available)
//! 2. **Auth**: brokerage credentials and trading mode
//! 3. **HTTP API**: `RwaHttp`, one method per upstream endpoint
//! 4. **High-Level Client**: `RwaClient` with nested sub-clients
//! 5. **Settlement**: the end-to-end mint flow on top of the client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rwa_settlement::prelude::*;
//!
//! let client = RwaClient::builder()
//!     .credentials(BrokerCredentials::new(key_id, secret_key))
//!     .build()?;
//!
//! let request = MintRequest::new("TSLA", "USDC", "100000000");
//! let result = client.settlement().execute(&request).await?;
//! println!("{}", result.to_hex());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and decimal scaling.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Upstream URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Brokerage credentials and trading mode.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `RwaClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Settlement ──────────────────────────────────────────────────────

/// Mint request settlement.
#[cfg(feature = "http")]
pub mod settlement;

/// Host binary configuration and log subscriber setup.
#[cfg(feature = "cli")]
pub mod env;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Notional, OrderId, Side, Symbol};

    // Domain types
    pub use crate::domain::market::MarketClock;
    pub use crate::domain::order::{Order, OrderAck, OrderStatus, OrderType, TimeInForce};
    pub use crate::domain::payment::PaymentToken;
    pub use crate::domain::price::{PriceFeedId, PriceQuote};

    // Errors
    pub use crate::error::{
        HttpError, OrderStatusError, OrderSubmitError, PriceFetchError, SettlementError,
    };

    // Network + auth
    pub use crate::auth::{BrokerCredentials, TradingMode};
    pub use crate::network::{DEFAULT_PRICE_FEED_URL, LIVE_BROKER_URL, PAPER_BROKER_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        MarketClient, OrdersClient, PricesClient, RwaClient, RwaClientBuilder,
    };

    // Settlement
    #[cfg(feature = "http")]
    pub use crate::settlement::{MintRequest, MintResult, Settlement, SettlementAdapter};
}
