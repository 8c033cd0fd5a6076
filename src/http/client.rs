//! Low-level HTTP client: `RwaHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Brokerage calls carry the API key
//! headers; price feed calls are unauthenticated. Nothing is retried.

use crate::auth::{BrokerCredentials, API_KEY_HEADER, API_SECRET_HEADER};
use crate::domain::market::wire::ClockResponse;
use crate::domain::order::wire::{CreateOrderRequest, OrderResponse};
use crate::domain::price::wire::SimplePriceResponse;
use crate::domain::price::PriceFeedId;
use crate::error::{ErrorResponse, HttpError};
use crate::shared::OrderId;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Low-level HTTP client for the brokerage and price feed REST APIs.
#[derive(Clone)]
pub struct RwaHttp {
    broker_url: String,
    price_feed_url: String,
    client: Client,
    /// NEVER exposed publicly.
    credentials: BrokerCredentials,
}

impl RwaHttp {
    pub fn new(
        broker_url: &str,
        price_feed_url: &str,
        credentials: BrokerCredentials,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            broker_url: broker_url.trim_end_matches('/').to_string(),
            price_feed_url: price_feed_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        })
    }

    pub fn broker_url(&self) -> &str {
        &self.broker_url
    }

    pub fn price_feed_url(&self) -> &str {
        &self.price_feed_url
    }

    // ── Brokerage ────────────────────────────────────────────────────────

    pub async fn get_clock(&self) -> Result<ClockResponse, HttpError> {
        let url = format!("{}/v2/clock", self.broker_url);
        self.send(self.authenticated(self.client.get(&url))).await
    }

    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderResponse, HttpError> {
        let url = format!("{}/v2/orders", self.broker_url);
        self.send(self.authenticated(self.client.post(&url).json(request)))
            .await
    }

    pub async fn get_order(&self, order_id: &OrderId) -> Result<OrderResponse, HttpError> {
        let url = format!(
            "{}/v2/orders/{}",
            self.broker_url,
            urlencoding::encode(order_id.as_str())
        );
        self.send(self.authenticated(self.client.get(&url))).await
    }

    // ── Price feed ───────────────────────────────────────────────────────

    pub async fn get_simple_price(
        &self,
        feed_id: &PriceFeedId,
    ) -> Result<SimplePriceResponse, HttpError> {
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd",
            self.price_feed_url,
            urlencoding::encode(feed_id.as_str())
        );
        self.send(self.client.get(&url)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn authenticated(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(API_KEY_HEADER, &self.credentials.api_key)
            .header(API_SECRET_HEADER, &self.credentials.api_secret)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, HttpError> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        tracing::debug!(status = status_code, body = %body_text, "Upstream request failed");

        match status_code {
            401 => Err(HttpError::Unauthorized),
            403 => Err(HttpError::Forbidden(ErrorResponse::message_from_body(
                &body_text,
            ))),
            404 => Err(HttpError::NotFound(ErrorResponse::message_from_body(
                &body_text,
            ))),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(ErrorResponse::message_from_body(
                &body_text,
            ))),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl std::fmt::Debug for RwaHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RwaHttp")
            .field("broker_url", &self.broker_url)
            .field("price_feed_url", &self.price_feed_url)
            .field("client", &"<Client>")
            .field("credentials", &self.credentials)
            .finish()
    }
}
