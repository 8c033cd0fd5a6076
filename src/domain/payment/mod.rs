//! Payment token domain: the ERC-20 a user pays with and its decimals.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::shared::{normalize_raw_amount, ScalingError};

/// Decimals assumed for any payment token not listed in the table.
pub const DEFAULT_PAYMENT_DECIMALS: u32 = 18;

lazy_static! {
    /// Uppercased payment symbol → on-chain decimals.
    static ref PAYMENT_TOKEN_DECIMALS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();
        m.insert("USDC", 6);
        m
    };
}

/// A payment token resolved against the decimals table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentToken {
    /// Uppercased symbol, e.g. `"WETH"`.
    pub symbol: String,
    pub decimals: u32,
}

impl PaymentToken {
    /// Resolve a symbol case-insensitively.
    pub fn resolve(symbol: &str) -> Self {
        let symbol = symbol.trim().to_uppercase();
        let decimals = Self::decimals_for(&symbol);
        Self { symbol, decimals }
    }

    /// Convert a raw smallest-unit amount of this token to a decimal amount.
    pub fn normalize(&self, amount_raw: &str) -> Result<Decimal, ScalingError> {
        normalize_raw_amount(amount_raw, self.decimals)
    }

    /// Decimals for a payment symbol: 6 for USDC, 18 for everything else.
    pub fn decimals_for(symbol: &str) -> u32 {
        PAYMENT_TOKEN_DECIMALS
            .get(symbol.trim().to_uppercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_PAYMENT_DECIMALS)
    }
}
