//! Brokerage authentication: static key/secret header credentials and
//! trading mode selection.
//!
//! ## Security Model
//!
//! - Credentials are injected at runtime (builder or host environment), never
//!   compiled in.
//! - `Debug` output redacts both the key id and the secret, so credentials
//!   cannot leak through `tracing` fields or error reports.
//! - Only the brokerage requests carry the headers. The price feed is called
//!   unauthenticated.

use serde::Deserialize;

use crate::network::{LIVE_BROKER_URL, PAPER_BROKER_URL};

/// Header carrying the brokerage API key id.
pub const API_KEY_HEADER: &str = "APCA-API-KEY-ID";

/// Header carrying the brokerage API secret.
pub const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

// ============================================================================
// Credentials
// ============================================================================

/// Brokerage API key pair.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct BrokerCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl BrokerCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Both halves present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_secret.trim().is_empty()
    }
}

impl std::fmt::Debug for BrokerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerCredentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Trading mode
// ============================================================================

/// Which brokerage environment orders are routed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingMode {
    #[default]
    Paper,
    Live,
}

impl TradingMode {
    /// Base URL of the brokerage REST API for this mode.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Paper => PAPER_BROKER_URL,
            Self::Live => LIVE_BROKER_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for TradingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TradingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paper" => Ok(Self::Paper),
            "live" => Ok(Self::Live),
            other => Err(format!("Unknown trading mode: {}", other)),
        }
    }
}
