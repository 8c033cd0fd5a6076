//! Host binary configuration: command-line arguments with environment
//! fallbacks, and log subscriber setup.

use clap::Parser;
use std::time::Duration;
use tracing::Level;

use crate::auth::{BrokerCredentials, TradingMode};
use crate::client::RwaClient;
use crate::error::SettlementError;
use crate::http::client::DEFAULT_TIMEOUT_SECS;
use crate::network::DEFAULT_PRICE_FEED_URL;
use crate::settlement::MintRequest;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&LogLevel> for Level {
    fn from(log_level: &LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Settle one mint request and print the encoded `uint256` on stdout.
#[derive(Parser, Clone)]
#[command(name = "rwa-settle", version)]
pub struct Env {
    /// Brokerage ticker of the asset to mint
    pub symbol: String,
    /// Payment token symbol, e.g. USDC or WETH
    pub payment_token: String,
    /// Amount paid in the payment token's smallest units
    pub amount_raw: String,
    #[clap(long, env = "APCA_API_KEY_ID", hide_env_values = true)]
    api_key: String,
    #[clap(long, env = "APCA_API_SECRET_KEY", hide_env_values = true)]
    api_secret: String,
    #[clap(long, env, default_value = "paper")]
    trading_mode: TradingMode,
    /// Overrides the trading mode's brokerage URL
    #[clap(long, env)]
    broker_url: Option<String>,
    #[clap(long, env, default_value = DEFAULT_PRICE_FEED_URL)]
    price_feed_url: String,
    /// Per-request timeout in seconds
    #[clap(long, env, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    #[clap(long, env, default_value = "info")]
    pub log_level: LogLevel,
}

impl Env {
    pub fn mint_request(&self) -> MintRequest {
        MintRequest::new(
            self.symbol.as_str(),
            self.payment_token.as_str(),
            self.amount_raw.as_str(),
        )
    }

    pub fn build_client(&self) -> Result<RwaClient, SettlementError> {
        let mut builder = RwaClient::builder()
            .credentials(BrokerCredentials::new(&self.api_key, &self.api_secret))
            .trading_mode(self.trading_mode)
            .price_feed_url(&self.price_feed_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(url) = &self.broker_url {
            builder = builder.broker_url(url);
        }

        builder.build()
    }
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over
/// `log_level`. Logs go to stderr.
pub fn setup_tracing(log_level: &LogLevel) {
    let level: Level = log_level.into();
    let default_filter = format!("rwa_settlement={level},rwa_settle={level}");

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
