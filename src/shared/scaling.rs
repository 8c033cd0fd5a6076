//! Pure conversion module between raw token units, USD notionals and
//! 18-decimal on-chain quantities.
//!
//! All math uses `rust_decimal::Decimal` for exact arithmetic.
//! No async, no network calls.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// Fraction of the payment's USD value that is spent on the order.
pub const NOTIONAL_SAFETY_MARGIN: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Decimal places of the minted RWA token.
pub const MINT_TOKEN_DECIMALS: u32 = 18;

/// Decimal places the brokerage accepts for a notional.
pub const NOTIONAL_DECIMALS: u32 = 2;

/// Errors that can occur while scaling amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    InvalidAmount { input: String, reason: String },
    Negative(String),
    Overflow { context: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::InvalidAmount { input, reason } => {
                write!(f, "Invalid amount '{}': {}", input, reason)
            }
            ScalingError::Negative(v) => write!(f, "Amount must not be negative, got {}", v),
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
        }
    }
}

impl std::error::Error for ScalingError {}

// ─── Notional ────────────────────────────────────────────────────────────────

/// A USD order size with exactly two decimal places.
///
/// Serializes as a decimal string (`"90.00"`), which is what the brokerage
/// order endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Notional(Decimal);

impl Notional {
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Notional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Notional {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Convert a raw smallest-unit integer string into a human-readable amount.
///
/// ```text
/// amount = raw / 10^decimals
/// ```
///
/// The raw value must be a plain non-negative base-10 integer (`"1500000"`),
/// the way token amounts arrive from the chain.
pub fn normalize_raw_amount(raw: &str, decimals: u32) -> Result<Decimal, ScalingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScalingError::InvalidAmount {
            input: raw.to_string(),
            reason: "empty".to_string(),
        });
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScalingError::InvalidAmount {
            input: raw.to_string(),
            reason: "expected a non-negative integer in base units".to_string(),
        });
    }

    let units = trimmed
        .parse::<i128>()
        .map_err(|_| ScalingError::Overflow {
            context: format!("raw amount {} does not fit in 128 bits", trimmed),
        })?;

    Decimal::try_from_i128_with_scale(units, decimals).map_err(|_| ScalingError::Overflow {
        context: format!("raw amount {} / 10^{} is not representable", trimmed, decimals),
    })
}

/// Compute the USD notional for an order.
///
/// ```text
/// notional = amount * usd_price * 0.9
/// ```
///
/// The result is rounded to two decimal places, halves away from zero, so it
/// can exceed 90% of the payment's USD value by at most half a cent.
pub fn compute_notional(amount: Decimal, usd_price: Decimal) -> Result<Notional, ScalingError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ScalingError::Negative(amount.to_string()));
    }
    if usd_price.is_sign_negative() && !usd_price.is_zero() {
        return Err(ScalingError::Negative(usd_price.to_string()));
    }

    let value = amount
        .checked_mul(usd_price)
        .ok_or_else(|| ScalingError::Overflow {
            context: "amount * usd_price".to_string(),
        })?
        .checked_mul(NOTIONAL_SAFETY_MARGIN)
        .ok_or_else(|| ScalingError::Overflow {
            context: "amount * usd_price * 0.9".to_string(),
        })?;

    let mut notional =
        value.round_dp_with_strategy(NOTIONAL_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    notional.rescale(NOTIONAL_DECIMALS);
    Ok(Notional(notional))
}

/// Scale a quantity to integer base units, rounding to the nearest unit
/// (halves away from zero).
///
/// Results are limited to `u128::MAX` units, and at 18 decimals the 96-bit
/// `Decimal` mantissa caps `qty` near 7.9e10, far below the `uint256` range.
///
/// ```text
/// units = round(qty * 10^decimals)
/// ```
pub fn scale_to_base_units(qty: Decimal, decimals: u32) -> Result<U256, ScalingError> {
    if qty.is_sign_negative() && !qty.is_zero() {
        return Err(ScalingError::Negative(qty.to_string()));
    }

    let multiplier = Decimal::from(10u64.checked_pow(decimals).ok_or_else(|| {
        ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        }
    })?);

    let scaled = qty
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", qty, decimals),
        })?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let units = scaled.to_u128().ok_or_else(|| ScalingError::Overflow {
        context: format!("{} does not fit in u128", scaled),
    })?;

    Ok(U256::from(units))
}
