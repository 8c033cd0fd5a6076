//! Wire types for the brokerage clock endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /v2/clock`
///
/// Timestamps arrive with an exchange-local offset
/// (`"2024-03-04T09:30:00-05:00"`) and are normalized to UTC.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ClockResponse {
    /// A missing flag reads as closed.
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_open: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_close: Option<DateTime<Utc>>,
}
