//! Wire types for the brokerage order endpoints.

use super::{OrderStatus, OrderType, TimeInForce};
use crate::shared::{Notional, Side, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /v2/orders` for a notional (dollar-sized) order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderRequest {
    pub symbol: Symbol,
    pub notional: Notional,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
}

impl CreateOrderRequest {
    /// A day market buy for `notional` dollars of `symbol`.
    pub fn market_buy(symbol: Symbol, notional: Notional) -> Self {
        Self {
            symbol,
            notional,
            side: Side::Buy,
            order_type: OrderType::Market,
            time_in_force: TimeInForce::Day,
        }
    }
}

/// Order object returned by `POST /v2/orders` and `GET /v2/orders/{id}`.
///
/// Every field is optional here; required ones are checked in the
/// conversions so a malformed body maps to the right settlement error.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct OrderResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub notional: Option<String>,
    #[serde(default)]
    pub filled_qty: Option<String>,
    #[serde(default)]
    pub filled_avg_price: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub filled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::compute_notional;
    use rust_decimal::Decimal;

    #[test]
    fn test_market_buy_request_serialize() {
        let notional = compute_notional(Decimal::from(100), Decimal::ONE).unwrap();
        let request = CreateOrderRequest::market_buy(Symbol::from("TSLA"), notional);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "symbol": "TSLA",
                "notional": "90.00",
                "side": "buy",
                "type": "market",
                "time_in_force": "day"
            })
        );
    }

    #[test]
    fn test_order_response_deserialize_full() {
        let json = r#"{
            "id": "61e69015-8549-4bfd-b9c3-01e75843f47d",
            "client_order_id": "eb9e2aaa-f71a-4f51-b5b4-52a6c565dad4",
            "created_at": "2024-03-04T14:30:00.123456Z",
            "submitted_at": "2024-03-04T14:30:00.125Z",
            "filled_at": "2024-03-04T14:30:00.301Z",
            "symbol": "TSLA",
            "notional": "90",
            "qty": null,
            "filled_qty": "0.451923071",
            "filled_avg_price": "199.15",
            "order_type": "market",
            "type": "market",
            "side": "buy",
            "time_in_force": "day",
            "status": "filled"
        }"#;
        let resp: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id.as_deref(), Some("61e69015-8549-4bfd-b9c3-01e75843f47d"));
        assert_eq!(resp.status, Some(OrderStatus::Filled));
        assert_eq!(resp.filled_qty.as_deref(), Some("0.451923071"));
        assert!(resp.filled_at.is_some());
    }

    #[test]
    fn test_order_response_deserialize_sparse() {
        let resp: OrderResponse = serde_json::from_str(r#"{"status": "new", "filled_qty": null}"#).unwrap();
        assert!(resp.id.is_none());
        assert_eq!(resp.status, Some(OrderStatus::New));
        assert!(resp.filled_qty.is_none());
    }
}
