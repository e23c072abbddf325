use reqwest::StatusCode;

use super::*;

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InsufficientFunds
            | Self::PropResolved
            | Self::AlreadyResolved
            | Self::PropNotResolved
            | Self::AlreadyMember => StatusCode::CONFLICT,
            Self::InvalidAmount
            | Self::InvalidOdds
            | Self::InvalidChoice
            | Self::InvalidProp
            | Self::InvalidParty
            | Self::HostCannotLeave => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotHost | Self::NotCreator => StatusCode::FORBIDDEN,
            Self::MemberNotFound | Self::PartyNotFound | Self::PropNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::JoinCodeExhausted => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
