//! Market sub-client: trading clock queries.

use crate::client::RwaClient;
use crate::domain::market::MarketClock;
use crate::error::HttpError;

pub struct Market<'a> {
    pub(crate) client: &'a RwaClient,
}

impl<'a> Market<'a> {
    /// Fetch the brokerage market clock.
    pub async fn clock(&self) -> Result<MarketClock, HttpError> {
        let resp = self.client.http.get_clock().await?;
        Ok(resp.into())
    }

    /// Whether the equity market is currently open for trading.
    pub async fn is_open(&self) -> Result<bool, HttpError> {
        Ok(self.clock().await?.is_open)
    }
}
