//! Network URL constants for the settlement adapter.

/// Brokerage paper-trading REST base URL.
pub const PAPER_BROKER_URL: &str = "https://paper-api.alpaca.markets";

/// Brokerage live-trading REST base URL.
pub const LIVE_BROKER_URL: &str = "https://api.alpaca.markets";

/// Default price feed base URL.
pub const DEFAULT_PRICE_FEED_URL: &str = "https://api.coingecko.com";
