use crate::api::{ErrorKind, RowId, UserId};
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Member {user} has insufficient funds in party {party}")]
    InsufficientFunds { party: RowId, user: UserId },
    #[error("Amount {0} must be positive with at most two decimal places")]
    InvalidAmount(String),
    #[error("American odds must not be zero")]
    InvalidOdds,
    #[error("'{0}' is not an option of this prop")]
    InvalidChoice(String),
    #[error("Invalid prop: {0}")]
    InvalidProp(&'static str),
    #[error("Invalid party: {0}")]
    InvalidParty(&'static str),
    #[error("Prop {0} is already resolved")]
    PropResolved(RowId),
    #[error("Prop {0} is not resolved yet")]
    PropNotResolved(RowId),
    #[error("Prop {0} was already resolved")]
    AlreadyResolved(RowId),
    #[error("Only the host of party {0} can do this")]
    NotHost(RowId),
    #[error("Only the creator of prop {0} or the party host can edit it")]
    NotCreator(RowId),
    #[error("User {user} is not a member of party {party}")]
    MemberNotFound { party: RowId, user: UserId },
    #[error("There is no party {0}")]
    PartyNotFound(String),
    #[error("There is no prop {0}")]
    PropNotFound(RowId),
    #[error("User {user} already is a member of party {party}")]
    AlreadyMember { party: RowId, user: UserId },
    #[error("The host can't leave party {0}, delete it instead")]
    HostCannotLeave(RowId),
    #[error("Couldn't find an unused join code after {0} attempts")]
    JoinCodeExhausted(u32),
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}
impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::InvalidOdds => ErrorKind::InvalidOdds,
            Self::InvalidChoice(_) => ErrorKind::InvalidChoice,
            Self::InvalidProp(_) => ErrorKind::InvalidProp,
            Self::InvalidParty(_) => ErrorKind::InvalidParty,
            Self::PropResolved(_) => ErrorKind::PropResolved,
            Self::PropNotResolved(_) => ErrorKind::PropNotResolved,
            Self::AlreadyResolved(_) => ErrorKind::AlreadyResolved,
            Self::NotHost(_) => ErrorKind::NotHost,
            Self::NotCreator(_) => ErrorKind::NotCreator,
            Self::MemberNotFound { .. } => ErrorKind::MemberNotFound,
            Self::PartyNotFound(_) => ErrorKind::PartyNotFound,
            Self::PropNotFound(_) => ErrorKind::PropNotFound,
            Self::AlreadyMember { .. } => ErrorKind::AlreadyMember,
            Self::HostCannotLeave(_) => ErrorKind::HostCannotLeave,
            Self::JoinCodeExhausted(_) => ErrorKind::JoinCodeExhausted,
            Self::Storage(_) | Self::Corrupt(_) => ErrorKind::Internal,
        }
    }
    pub fn member_not_found(party: RowId, user: &str) -> Self {
        Self::MemberNotFound {
            party,
            user: user.to_string(),
        }
    }
}
