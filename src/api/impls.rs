use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use anyhow::bail;

use super::*;

impl Display for WagerStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let output = match self {
            Self::Active => "active",
            Self::Win => "win",
            Self::Loss => "loss",
        };
        write!(f, "{}", output)
    }
}
impl FromStr for WagerStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            e => bail!("Couldn't deserialize to WagerStatus: {}", e),
        }
    }
}
impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Prop {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }
    /// Odds currently offered for `choice`, `None` if it is not one of the
    /// two options.
    pub fn odds_for(&self, choice: &str) -> Option<AmericanOdds> {
        if choice == self.option1 {
            Some(self.odds1)
        } else if choice == self.option2 {
            Some(self.odds2)
        } else {
            None
        }
    }
}
impl LeaderboardEntry {
    /// "3" for an untied rank, "T-3" for a rank shared with others.
    pub fn display_rank(&self) -> String {
        if self.tied {
            format!("T-{}", self.rank)
        } else {
            self.rank.to_string()
        }
    }
}
