//! Conversion between API amounts and the integer cents kept in storage.

use crate::api::Cents;
use crate::error::{LedgerError, LedgerResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a positive amount with at most two decimal places to cents.
pub fn to_cents(amount: Decimal) -> LedgerResult<Cents> {
    if amount <= Decimal::ZERO || amount.normalize().scale() > 2 {
        return Err(LedgerError::InvalidAmount(amount.to_string()));
    }
    (amount * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| LedgerError::InvalidAmount(amount.to_string()))
}
pub fn from_cents(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}
/// Rounds half-up (away from zero) to whole cents.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
