//! End-to-end mint settlement.
//!
//! A [`MintRequest`] goes through a fixed sequence of upstream calls:
//! market clock, payment token price, market buy, one order status check.
//! The outcome is a [`Settlement`] whose [`MintResult`] is the number of
//! 18-decimal base units of the real-world-asset token to mint.

pub mod result;

pub use result::{MintResult, Settlement};

use crate::client::RwaClient;
use crate::domain::payment::PaymentToken;
use crate::error::SettlementError;
use crate::shared::{compute_notional, scale_to_base_units, Symbol, MINT_TOKEN_DECIMALS};

/// A single mint request as delivered by the oracle host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    /// Brokerage ticker of the asset to buy, passed through unchanged.
    pub symbol_to_mint: Symbol,
    /// Symbol of the ERC-20 the user paid with, e.g. `"USDC"`.
    pub payment_token_symbol: String,
    /// Decimal string of the paid amount in the token's smallest units.
    pub amount_paid_raw: String,
}

impl MintRequest {
    pub fn new(
        symbol_to_mint: impl Into<Symbol>,
        payment_token_symbol: impl Into<String>,
        amount_paid_raw: impl Into<String>,
    ) -> Self {
        Self {
            symbol_to_mint: symbol_to_mint.into(),
            payment_token_symbol: payment_token_symbol.into(),
            amount_paid_raw: amount_paid_raw.into(),
        }
    }

    /// Build a request from the host's positional arguments:
    /// `[symbol_to_mint, payment_token_symbol, amount_paid_raw, ..]`.
    /// Arguments past the third are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, SettlementError> {
        match args {
            [symbol, payment, amount, ..] => Ok(Self::new(
                symbol.as_ref(),
                payment.as_ref(),
                amount.as_ref(),
            )),
            _ => Err(SettlementError::InvalidRequest(format!(
                "expected at least 3 arguments (symbol, payment token, raw amount), got {}",
                args.len()
            ))),
        }
    }
}

/// Runs mint requests against the brokerage and price feed of an
/// [`RwaClient`]. Obtained via [`RwaClient::settlement`].
pub struct SettlementAdapter<'a> {
    pub(crate) client: &'a RwaClient,
}

impl<'a> SettlementAdapter<'a> {
    /// Settle a request and return only the amount to mint.
    pub async fn execute(&self, request: &MintRequest) -> Result<MintResult, SettlementError> {
        Ok(self.settle(request).await?.result())
    }

    /// Settle a request, keeping the order details alongside the result.
    ///
    /// Steps run strictly in order and each one starts only after the
    /// previous one succeeded. A closed market stops before any price or
    /// order call, and a failed order submission stops before any status
    /// call.
    pub async fn settle(&self, request: &MintRequest) -> Result<Settlement, SettlementError> {
        tracing::info!(
            symbol = %request.symbol_to_mint,
            payment_token = %request.payment_token_symbol,
            amount_raw = %request.amount_paid_raw,
            "Settling mint request"
        );

        let clock = self
            .client
            .market()
            .clock()
            .await
            .map_err(SettlementError::MarketCheck)?;
        if !clock.is_open {
            tracing::info!(next_open = ?clock.next_open, "Market closed, nothing to mint");
            return Ok(Settlement::MarketClosed);
        }

        let token = PaymentToken::resolve(&request.payment_token_symbol);
        let amount_paid = token
            .normalize(&request.amount_paid_raw)
            .map_err(|e| SettlementError::InvalidRequest(e.to_string()))?;

        let quote = self
            .client
            .prices()
            .usd_quote(&request.payment_token_symbol)
            .await?;
        let notional = compute_notional(amount_paid, quote.usd_price)?;
        tracing::debug!(
            token = %token.symbol,
            decimals = token.decimals,
            %amount_paid,
            usd_price = %quote.usd_price,
            %notional,
            "Computed order notional"
        );

        let ack = self
            .client
            .orders()
            .submit_market_buy(&request.symbol_to_mint, notional)
            .await?;
        tracing::info!(order_id = %ack.id, %notional, "Market buy submitted");

        let order = self.client.orders().get(&ack.id).await?;
        if !order.is_filled() {
            tracing::warn!(
                order_id = %order.id,
                status = %order.status,
                "Order not filled at status check, nothing to mint"
            );
            return Ok(Settlement::NotFilled {
                order_id: order.id,
                status: order.status,
                notional,
            });
        }

        let units = scale_to_base_units(order.filled_qty, MINT_TOKEN_DECIMALS)?;
        let result = MintResult::from_units(units);
        tracing::info!(
            order_id = %order.id,
            filled_qty = %order.filled_qty,
            %result,
            "Order filled"
        );

        Ok(Settlement::Filled {
            order_id: order.id,
            notional,
            filled_qty: order.filled_qty,
            result,
        })
    }
}
