//! Unified settlement error types.

use thiserror::Error;

use crate::shared::ScalingError;

/// Top-level settlement error.
///
/// `MarketCheck`, `PriceFetch`, `OrderSubmit` and `OrderStatus` each stop the
/// settlement at the step that failed. "Market closed" and "order not filled"
/// are not errors; they settle with a zero result.
#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Invalid mint request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Market status check failed: {0}")]
    MarketCheck(#[source] HttpError),

    #[error("Price fetch failed: {0}")]
    PriceFetch(#[from] PriceFetchError),

    #[error("Order submission failed: {0}")]
    OrderSubmit(#[from] OrderSubmitError),

    #[error("Order status fetch failed: {0}")]
    OrderStatus(#[from] OrderStatusError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Price feed lookup errors.
#[derive(Error, Debug)]
pub enum PriceFetchError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Price feed has no USD quote for '{0}'")]
    MissingQuote(String),

    #[error("Price feed returned an unusable quote for '{feed_id}': {value}")]
    InvalidQuote { feed_id: String, value: f64 },
}

/// Order submission errors.
#[derive(Error, Debug)]
pub enum OrderSubmitError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Order response did not include an order id")]
    MissingOrderId,
}

/// Order status errors.
#[derive(Error, Debug)]
pub enum OrderStatusError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Order {order_id} reported an invalid filled quantity '{value}'")]
    InvalidFilledQty { order_id: String, value: String },
}

/// Error body returned by the brokerage on non-2xx responses.
///
/// Alpaca sends `{"code": 40310000, "message": "insufficient buying power"}`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<u64>,
    #[serde(alias = "error")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best-effort message extraction: the JSON `message` if present,
    /// otherwise the raw body.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse {
                message: Some(message),
                ..
            }) => message,
            _ => body.to_string(),
        }
    }
}
