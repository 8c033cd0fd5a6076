//! Conversions: price feed wire types → PriceQuote.

use super::wire::SimplePriceResponse;
use super::{PriceFeedId, PriceQuote};
use crate::error::PriceFetchError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

impl PriceQuote {
    /// Pick the quote for `feed_id` out of a simple price response.
    ///
    /// The response must be keyed by the same id that was requested; a
    /// missing key, a missing `usd` field or a non-positive price is an error,
    /// never a default.
    pub fn from_response(
        feed_id: PriceFeedId,
        mut response: SimplePriceResponse,
    ) -> Result<Self, PriceFetchError> {
        let usd = response
            .remove(feed_id.as_str())
            .and_then(|price| price.usd)
            .ok_or_else(|| PriceFetchError::MissingQuote(feed_id.to_string()))?;

        let usd_price = Decimal::from_f64(usd)
            .filter(|p| p.is_sign_positive() && !p.is_zero())
            .ok_or_else(|| PriceFetchError::InvalidQuote {
                feed_id: feed_id.to_string(),
                value: usd,
            })?;

        Ok(PriceQuote { feed_id, usd_price })
    }
}
