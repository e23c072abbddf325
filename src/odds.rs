use crate::api::AmericanOdds;
use crate::error::{LedgerError, LedgerResult};
use crate::money::round_to_cents;
use rust_decimal::Decimal;

/// Total return (stake included) of a winning stake at American odds.
pub fn payout(stake: Decimal, odds: AmericanOdds) -> LedgerResult<Decimal> {
    //! Positive odds are the profit per 100 staked, negative odds the stake
    //! needed for 100 profit. Intermediate values keep full precision and
    //! only the result is rounded to cents.
    let odds = validate_odds(odds)?;
    let hundred = Decimal::ONE_HUNDRED;
    let profit = if odds > 0 {
        stake * Decimal::from(odds) / hundred
    } else {
        stake * hundred / Decimal::from(odds.unsigned_abs())
    };
    Ok(round_to_cents(stake + profit))
}
pub fn profit(stake: Decimal, odds: AmericanOdds) -> LedgerResult<Decimal> {
    Ok(payout(stake, odds)? - stake)
}
pub fn validate_odds(odds: AmericanOdds) -> LedgerResult<AmericanOdds> {
    if odds == 0 {
        return Err(LedgerError::InvalidOdds);
    }
    Ok(odds)
}
