//! Conversions: order wire types → OrderAck / Order domain types.

use super::wire::OrderResponse;
use super::{Order, OrderAck, OrderStatus};
use crate::error::{OrderStatusError, OrderSubmitError};
use crate::shared::{OrderId, Symbol};
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<OrderResponse> for OrderAck {
    type Error = OrderSubmitError;

    fn try_from(resp: OrderResponse) -> Result<Self, Self::Error> {
        let id = resp
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(OrderSubmitError::MissingOrderId)?;

        Ok(OrderAck {
            id: OrderId::new(id),
            status: resp.status,
        })
    }
}

impl Order {
    /// Build an order view from a status response for `order_id`.
    ///
    /// A missing status becomes [`OrderStatus::Unknown`], a missing or null
    /// `filled_qty` becomes zero. A `filled_qty` that is present but not a
    /// non-negative decimal is an error.
    pub fn from_status_response(
        order_id: &OrderId,
        resp: OrderResponse,
    ) -> Result<Self, OrderStatusError> {
        let filled_qty = match resp.filled_qty.as_deref().map(str::trim) {
            None | Some("") => Decimal::ZERO,
            Some(raw) => Decimal::from_str(raw)
                .ok()
                .filter(|qty| !qty.is_sign_negative() || qty.is_zero())
                .ok_or_else(|| OrderStatusError::InvalidFilledQty {
                    order_id: order_id.to_string(),
                    value: raw.to_string(),
                })?,
        };

        Ok(Order {
            id: resp.id.map(OrderId::new).unwrap_or_else(|| order_id.clone()),
            symbol: resp.symbol.map(Symbol::new),
            status: resp.status.unwrap_or(OrderStatus::Unknown),
            filled_qty,
            filled_avg_price: resp
                .filled_avg_price
                .as_deref()
                .and_then(|p| Decimal::from_str(p).ok()),
            submitted_at: resp.submitted_at,
            filled_at: resp.filled_at,
        })
    }
}
