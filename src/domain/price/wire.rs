//! Wire types for the price feed's simple price endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `GET /api/v3/simple/price?ids={id}&vs_currencies=usd`
///
/// The body is keyed by the requested id: `{"ethereum": {"usd": 3120.55}}`.
/// Unrecognized ids are simply absent, which yields `{}`.
pub type SimplePriceResponse = HashMap<String, SimplePrice>;

/// Prices of one asset in the requested vs-currencies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplePrice {
    #[serde(default)]
    pub usd: Option<f64>,
}
