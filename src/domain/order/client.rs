//! Orders sub-client: submit and query brokerage orders.

use crate::client::RwaClient;
use crate::domain::order::wire::CreateOrderRequest;
use crate::domain::order::{Order, OrderAck};
use crate::error::{OrderStatusError, OrderSubmitError};
use crate::shared::{Notional, OrderId, Symbol};

pub struct Orders<'a> {
    pub(crate) client: &'a RwaClient,
}

impl<'a> Orders<'a> {
    /// Submit a day market buy for `notional` dollars of `symbol`.
    pub async fn submit_market_buy(
        &self,
        symbol: &Symbol,
        notional: Notional,
    ) -> Result<OrderAck, OrderSubmitError> {
        let request = CreateOrderRequest::market_buy(symbol.clone(), notional);
        self.submit(&request).await
    }

    pub async fn submit(&self, request: &CreateOrderRequest) -> Result<OrderAck, OrderSubmitError> {
        let resp = self.client.http.create_order(request).await?;
        OrderAck::try_from(resp)
    }

    /// Fetch the current state of an order. Single request, no polling.
    pub async fn get(&self, order_id: &OrderId) -> Result<Order, OrderStatusError> {
        let resp = self.client.http.get_order(order_id).await?;
        Order::from_status_response(order_id, resp)
    }
}
