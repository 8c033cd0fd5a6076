//! Settlement outcomes and the `uint256` value handed back to the oracle.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use std::fmt;

use crate::domain::order::OrderStatus;
use crate::shared::{Notional, OrderId};

// ─── MintResult ──────────────────────────────────────────────────────────────

/// Number of 18-decimal base units to mint. Zero means "no mint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MintResult(U256);

impl MintResult {
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn from_units(units: U256) -> Self {
        Self(units)
    }

    pub fn units(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// 32-byte big-endian ABI encoding of the `uint256`.
    pub fn to_abi_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// `0x`-prefixed, zero-padded 64-digit hex of the ABI encoding.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_abi_bytes()))
    }
}

impl fmt::Display for MintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MintResult> for U256 {
    fn from(result: MintResult) -> Self {
        result.0
    }
}

// ─── Settlement ──────────────────────────────────────────────────────────────

/// How a mint request settled.
///
/// Only [`Settlement::Filled`] carries a non-zero [`MintResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The brokerage reported the market closed; no order was placed.
    MarketClosed,
    /// An order was placed but was not filled at the single status check.
    NotFilled {
        order_id: OrderId,
        status: OrderStatus,
        notional: Notional,
    },
    /// The order filled.
    Filled {
        order_id: OrderId,
        notional: Notional,
        filled_qty: Decimal,
        result: MintResult,
    },
}

impl Settlement {
    pub fn result(&self) -> MintResult {
        match self {
            Settlement::Filled { result, .. } => *result,
            Settlement::MarketClosed | Settlement::NotFilled { .. } => MintResult::ZERO,
        }
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            Settlement::MarketClosed => None,
            Settlement::NotFilled { order_id, .. } | Settlement::Filled { order_id, .. } => {
                Some(order_id)
            }
        }
    }

    pub fn notional(&self) -> Option<Notional> {
        match self {
            Settlement::MarketClosed => None,
            Settlement::NotFilled { notional, .. } | Settlement::Filled { notional, .. } => {
                Some(*notional)
            }
        }
    }
}
