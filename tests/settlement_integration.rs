//! End-to-end settlement tests against mocked brokerage and price feed
//! servers.

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;

use rwa_settlement::error::{HttpError, OrderSubmitError, SettlementError};
use rwa_settlement::prelude::*;

const ORDER_ID: &str = "61e69015-8549-4bfd-b9c3-01e75843f47d";

struct Upstreams {
    broker: MockServer,
    prices: MockServer,
}

impl Upstreams {
    fn start() -> Self {
        Self {
            broker: MockServer::start(),
            prices: MockServer::start(),
        }
    }

    fn client(&self) -> RwaClient {
        RwaClient::builder()
            .credentials(BrokerCredentials::new("test_key_id", "test_secret_key"))
            .broker_url(&self.broker.base_url())
            .price_feed_url(&self.prices.base_url())
            .build()
            .unwrap()
    }

    fn clock(&self, is_open: bool) -> Mock<'_> {
        self.broker.mock(|when, then| {
            when.method(GET)
                .path("/v2/clock")
                .header("APCA-API-KEY-ID", "test_key_id")
                .header("APCA-API-SECRET-KEY", "test_secret_key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "is_open": is_open }));
        })
    }

    fn price(&self, feed_id: &str, usd: f64) -> Mock<'_> {
        let mut body = serde_json::Map::new();
        body.insert(feed_id.to_string(), json!({ "usd": usd }));

        self.prices.mock(|when, then| {
            when.method(GET)
                .path("/api/v3/simple/price")
                .query_param("ids", feed_id)
                .query_param("vs_currencies", "usd");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::Value::Object(body));
        })
    }

    fn any_price(&self) -> Mock<'_> {
        self.prices.mock(|when, then| {
            when.method(GET).path("/api/v3/simple/price");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({}));
        })
    }

    fn submit(&self, symbol: &str, notional: &str) -> Mock<'_> {
        self.broker.mock(|when, then| {
            when.method(POST).path("/v2/orders").json_body(json!({
                "symbol": symbol,
                "notional": notional,
                "side": "buy",
                "type": "market",
                "time_in_force": "day"
            }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "id": ORDER_ID, "status": "accepted" }));
        })
    }

    fn any_submit(&self) -> Mock<'_> {
        self.broker.mock(|when, then| {
            when.method(POST).path("/v2/orders");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "id": ORDER_ID, "status": "accepted" }));
        })
    }

    fn status(&self, body: serde_json::Value) -> Mock<'_> {
        self.broker.mock(|when, then| {
            when.method(GET).path(format!("/v2/orders/{ORDER_ID}"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
    }
}

fn usdc_request(symbol: &str, raw: &str) -> MintRequest {
    MintRequest::new(symbol, "USDC", raw)
}

// ─── Zero outcomes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_closed_market_returns_zero_without_trading() {
    let upstreams = Upstreams::start();
    let clock = upstreams.clock(false);
    let price = upstreams.any_price();
    let submit = upstreams.any_submit();

    let settlement = upstreams
        .client()
        .settlement()
        .settle(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap();

    assert_eq!(settlement, Settlement::MarketClosed);
    assert!(settlement.result().is_zero());
    clock.assert();
    price.assert_hits(0);
    submit.assert_hits(0);
}

#[tokio::test]
async fn test_closed_market_ignores_malformed_amount() {
    let upstreams = Upstreams::start();
    upstreams.clock(false);

    let result = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "not-a-number"))
        .await
        .unwrap();

    assert!(result.is_zero());
}

#[tokio::test]
async fn test_pending_order_returns_zero() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.submit("TSLA", "90.00");
    let status = upstreams.status(json!({
        "id": ORDER_ID,
        "status": "pending_new",
        "filled_qty": "0"
    }));

    let settlement = upstreams
        .client()
        .settlement()
        .settle(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap();

    match &settlement {
        Settlement::NotFilled {
            order_id,
            status,
            notional,
        } => {
            assert_eq!(order_id.as_str(), ORDER_ID);
            assert_eq!(*status, OrderStatus::PendingNew);
            assert_eq!(notional.to_string(), "90.00");
        }
        other => panic!("expected NotFilled, got {other:?}"),
    }
    assert!(settlement.result().is_zero());
    status.assert_hits(1);
}

#[tokio::test]
async fn test_partially_filled_order_returns_zero() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.submit("TSLA", "90.00");
    upstreams.status(json!({
        "id": ORDER_ID,
        "status": "partially_filled",
        "filled_qty": "0.2"
    }));

    let result = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap();

    assert!(result.is_zero());
}

#[tokio::test]
async fn test_filled_without_quantity_returns_zero() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.submit("TSLA", "90.00");
    upstreams.status(json!({ "id": ORDER_ID, "status": "filled" }));

    let result = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap();

    assert_eq!(result, MintResult::ZERO);
}

// ─── Filled ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_filled_order_scales_quantity_to_18_decimals() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    let price = upstreams.price("usd-coin", 1.0);
    let submit = upstreams.submit("TSLA", "90.00");
    let status = upstreams.status(json!({
        "id": ORDER_ID,
        "symbol": "TSLA",
        "status": "filled",
        "filled_qty": "1.5",
        "filled_avg_price": "60.00"
    }));

    let settlement = upstreams
        .client()
        .settlement()
        .settle(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap();

    let result = settlement.result();
    assert_eq!(result.to_string(), "1500000000000000000");
    assert_eq!(
        result.to_hex(),
        "0x00000000000000000000000000000000000000000000000014d1120d7b160000"
    );
    assert_eq!(settlement.order_id().map(OrderId::as_str), Some(ORDER_ID));

    price.assert();
    submit.assert();
    status.assert();
}

#[tokio::test]
async fn test_weth_payment_uses_18_decimals() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("ethereum", 2500.0);
    let submit = upstreams.submit("AAPL", "4500.00");
    upstreams.status(json!({
        "id": ORDER_ID,
        "status": "filled",
        "filled_qty": "20"
    }));

    let result = upstreams
        .client()
        .settlement()
        .execute(&MintRequest::new("AAPL", "weth", "2000000000000000000"))
        .await
        .unwrap();

    assert_eq!(result.to_string(), "20000000000000000000");
    submit.assert();
}

#[tokio::test]
async fn test_notional_is_rounded_to_cents() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    // 0.999999 × 0.9 = 0.8999991
    let submit = upstreams.submit("TSLA", "0.90");
    upstreams.status(json!({ "id": ORDER_ID, "status": "new" }));

    upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "999999"))
        .await
        .unwrap();

    submit.assert();
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_clock_failure_is_market_check_error() {
    let upstreams = Upstreams::start();
    upstreams.broker.mock(|when, then| {
        when.method(GET).path("/v2/clock");
        then.status(500).body("internal error");
    });
    let price = upstreams.any_price();
    let submit = upstreams.any_submit();

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SettlementError::MarketCheck(HttpError::ServerError { status: 500, .. })
    ));
    price.assert_hits(0);
    submit.assert_hits(0);
}

#[tokio::test]
async fn test_price_failure_stops_before_order() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.prices.mock(|when, then| {
        when.method(GET).path("/api/v3/simple/price");
        then.status(500);
    });
    let submit = upstreams.any_submit();

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap_err();

    assert!(matches!(err, SettlementError::PriceFetch(_)));
    submit.assert_hits(0);
}

#[tokio::test]
async fn test_missing_price_key_is_price_fetch_error() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    // Keyed by a different id than the one requested.
    upstreams.prices.mock(|when, then| {
        when.method(GET).path("/api/v3/simple/price");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "bitcoin": { "usd": 60000.0 } }));
    });
    let submit = upstreams.any_submit();

    let err = upstreams
        .client()
        .settlement()
        .execute(&MintRequest::new("TSLA", "LINK", "1000000000000000000"))
        .await
        .unwrap_err();

    match err {
        SettlementError::PriceFetch(PriceFetchError::MissingQuote(feed_id)) => {
            assert_eq!(feed_id, "chainlink");
        }
        other => panic!("expected MissingQuote, got {other:?}"),
    }
    submit.assert_hits(0);
}

#[tokio::test]
async fn test_rejected_order_is_submit_error() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.broker.mock(|when, then| {
        when.method(POST).path("/v2/orders");
        then.status(403)
            .header("content-type", "application/json")
            .json_body(json!({ "code": 40310000, "message": "insufficient buying power" }));
    });
    let status = upstreams.status(json!({ "id": ORDER_ID, "status": "filled" }));

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap_err();

    match err {
        SettlementError::OrderSubmit(OrderSubmitError::Http(HttpError::Forbidden(msg))) => {
            assert_eq!(msg, "insufficient buying power");
        }
        other => panic!("expected Forbidden submit error, got {other:?}"),
    }
    status.assert_hits(0);
}

#[tokio::test]
async fn test_order_without_id_is_submit_error() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.broker.mock(|when, then| {
        when.method(POST).path("/v2/orders");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": "accepted" }));
    });

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SettlementError::OrderSubmit(OrderSubmitError::MissingOrderId)
    ));
}

#[tokio::test]
async fn test_status_failure_is_order_status_error() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    upstreams.price("usd-coin", 1.0);
    upstreams.submit("TSLA", "90.00");
    upstreams.broker.mock(|when, then| {
        when.method(GET).path(format!("/v2/orders/{ORDER_ID}"));
        then.status(502).body("bad gateway");
    });

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "100000000"))
        .await
        .unwrap_err();

    assert!(matches!(err, SettlementError::OrderStatus(_)));
}

#[tokio::test]
async fn test_invalid_amount_is_rejected_before_pricing() {
    let upstreams = Upstreams::start();
    upstreams.clock(true);
    let price = upstreams.any_price();
    let submit = upstreams.any_submit();

    let err = upstreams
        .client()
        .settlement()
        .execute(&usdc_request("TSLA", "12.5"))
        .await
        .unwrap_err();

    assert!(matches!(err, SettlementError::InvalidRequest(_)));
    price.assert_hits(0);
    submit.assert_hits(0);
}
