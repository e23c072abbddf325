use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::*;

// Requests
/// A state changing request on behalf of `user`. The identity is resolved
/// by the authentication layer in front of the server.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostRequest<T> {
    pub user: UserId,
    pub data: T,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreatePartyRequest {
    pub name: String,
    pub starting_balance: Decimal,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JoinPartyRequest {
    pub join_code: String,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PartyRequest {
    pub party: RowId,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserRequest {
    pub user: UserId,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MemberRequest {
    pub party: RowId,
    pub user: UserId,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreatePropRequest {
    pub party: RowId,
    pub title: String,
    pub description: String,
    pub option1: String,
    pub odds1: AmericanOdds,
    pub option2: String,
    pub odds2: AmericanOdds,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EditPropRequest {
    pub prop: RowId,
    pub edit: PropEdit,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlaceWagerRequest {
    pub prop: RowId,
    pub choice: String,
    pub stake: Decimal,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolvePropRequest {
    pub prop: RowId,
    pub winning_choice: String,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PropRequest {
    pub prop: RowId,
}
