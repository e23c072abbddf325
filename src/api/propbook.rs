use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type RowId = i64;
pub type UserId = String;
pub type AmericanOdds = i32;
pub type Cents = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Party {
    pub id: RowId,
    pub name: String,
    pub host: UserId,
    pub join_code: String,
    pub starting_balance: Decimal,
    pub created_at: DateTime<Utc>,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub party: RowId,
    pub user: UserId,
    pub balance: Decimal,
    pub joined_at: DateTime<Utc>,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prop {
    pub id: RowId,
    pub party: RowId,
    pub creator: UserId,
    pub title: String,
    pub description: String,
    pub option1: String,
    pub odds1: AmericanOdds,
    pub option2: String,
    pub odds2: AmericanOdds,
    /// Number of wagers ever placed on this prop.
    pub wager_count: u32,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub winning_choice: Option<String>,
}
/// Fields of an open prop that may be changed. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub option1: Option<String>,
    pub odds1: Option<AmericanOdds>,
    pub option2: Option<String>,
    pub odds2: Option<AmericanOdds>,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wager {
    pub id: RowId,
    pub party: RowId,
    pub prop: RowId,
    pub user: UserId,
    pub choice: String,
    /// Odds of `choice` at the time the wager was placed.
    pub odds: AmericanOdds,
    pub stake: Decimal,
    pub placed_at: DateTime<Utc>,
    pub status: WagerStatus,
}
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WagerStatus {
    Active,
    Win,
    Loss,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementReport {
    pub prop: RowId,
    pub winning_choice: String,
    pub winners: u32,
    pub losers: u32,
    pub total_paid_out: Decimal,
    /// Wagers whose settlement step kept failing. They stay active and can
    /// be settled later through `resettle_prop`.
    pub unsettled: Vec<RowId>,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub user: UserId,
    pub balance: Decimal,
    pub rank: u32,
    pub tied: bool,
    pub is_current: bool,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    InsufficientFunds,
    InvalidAmount,
    InvalidOdds,
    InvalidChoice,
    InvalidProp,
    InvalidParty,
    PropResolved,
    PropNotResolved,
    AlreadyResolved,
    NotHost,
    NotCreator,
    MemberNotFound,
    PartyNotFound,
    PropNotFound,
    AlreadyMember,
    HostCannotLeave,
    JoinCodeExhausted,
    Internal,
}
