//! Conversions: clock wire type → MarketClock.

use super::wire::ClockResponse;
use super::MarketClock;

impl From<ClockResponse> for MarketClock {
    fn from(c: ClockResponse) -> Self {
        Self {
            is_open: c.is_open,
            timestamp: c.timestamp,
            next_open: c.next_open,
            next_close: c.next_close,
        }
    }
}
