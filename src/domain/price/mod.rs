//! Price domain: payment-token USD quotes from the public price feed.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Uppercased payment symbol → price feed id.
    static ref PRICE_FEED_IDS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("USDC", "usd-coin");
        m.insert("WETH", "ethereum");
        m.insert("WAVAX", "avalanche");
        m.insert("LINK", "chainlink");
        m
    };
}

// ─── PriceFeedId ─────────────────────────────────────────────────────────────

/// Identifier of an asset on the price feed (e.g. `"ethereum"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceFeedId(String);

impl PriceFeedId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Map a payment symbol to its feed id.
    ///
    /// Known symbols use the fixed table. Anything else falls back to the
    /// lowercased symbol, which the feed may or may not recognize.
    pub fn for_payment_symbol(symbol: &str) -> Self {
        let upper = symbol.trim().to_uppercase();
        match PRICE_FEED_IDS.get(upper.as_str()) {
            Some(id) => Self((*id).to_string()),
            None => Self(symbol.trim().to_lowercase()),
        }
    }

    /// Whether the symbol resolved through the fixed table.
    pub fn is_known_symbol(symbol: &str) -> bool {
        PRICE_FEED_IDS.contains_key(symbol.trim().to_uppercase().as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PriceFeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── PriceQuote ──────────────────────────────────────────────────────────────

/// A validated USD price for one unit of a payment token.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub feed_id: PriceFeedId,
    pub usd_price: Decimal,
}
