use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
pub struct BalanceResponse {
    pub party: RowId,
    pub user: UserId,
    pub balance: Decimal,
}
/// A wager as shown to its owner. `payout` is the potential total return of
/// an active wager, the credited amount of a won wager and zero for a loss.
#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
pub struct WagerResponse {
    #[serde(flatten)]
    pub wager: Wager,
    pub payout: Decimal,
}
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}
