//! Prices sub-client: USD quotes for payment tokens.

use crate::client::RwaClient;
use crate::domain::price::{PriceFeedId, PriceQuote};
use crate::error::PriceFetchError;

pub struct Prices<'a> {
    pub(crate) client: &'a RwaClient,
}

impl<'a> Prices<'a> {
    /// USD price of one unit of the payment token `symbol`.
    pub async fn usd_quote(&self, symbol: &str) -> Result<PriceQuote, PriceFetchError> {
        let feed_id = PriceFeedId::for_payment_symbol(symbol);
        if !PriceFeedId::is_known_symbol(symbol) {
            tracing::warn!(
                symbol,
                %feed_id,
                "Unlisted payment token, using lowercased symbol as feed id"
            );
        }
        self.usd_quote_by_id(feed_id).await
    }

    /// USD price for an explicit feed id.
    pub async fn usd_quote_by_id(&self, feed_id: PriceFeedId) -> Result<PriceQuote, PriceFetchError> {
        let resp = self.client.http.get_simple_price(&feed_id).await?;
        PriceQuote::from_response(feed_id, resp)
    }
}
