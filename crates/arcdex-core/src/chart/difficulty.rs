use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::Error;

/// Difficulty tier of a chart.
///
/// The numeric code is what the song table stores in its `Difficulty` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[serde(into = "u8", try_from = "u8")]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(to_string = "PST", serialize = "Past")]
    Past = 0,
    #[strum(to_string = "PRS", serialize = "Present")]
    Present = 1,
    #[strum(to_string = "FTR", serialize = "Future")]
    Future = 2,
    #[strum(to_string = "BYD", serialize = "Beyond")]
    Beyond = 3,
    #[strum(
        to_string = "BYD-M",
        serialize = "Beyond Moment",
        serialize = "BeyondMoment",
        serialize = "Moment"
    )]
    BeyondMoment = 4,
    #[strum(
        to_string = "BYD-E",
        serialize = "Beyond Eternity",
        serialize = "BeyondEternity",
        serialize = "Eternity"
    )]
    BeyondEternity = 5,
}

impl Difficulty {
    /// Tiers in the order a page lists per-difficulty values.
    pub const POSITIONAL: [Difficulty; 4] = [
        Difficulty::Past,
        Difficulty::Present,
        Difficulty::Future,
        Difficulty::Beyond,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| Error::UnknownDifficulty(value.to_string()))
    }
}

/// Parse a difficulty from user input: short name, long name or numeric code.
pub fn parse_difficulty(input: &str) -> crate::Result<Difficulty> {
    let input = input.trim();
    if let Ok(code) = input.parse::<u8>() {
        return Difficulty::try_from(code);
    }
    input
        .parse()
        .map_err(|_| Error::UnknownDifficulty(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_u8() {
        assert_eq!(Difficulty::from_u8(0), Some(Difficulty::Past));
        assert_eq!(Difficulty::from_u8(3), Some(Difficulty::Beyond));
        assert_eq!(Difficulty::from_u8(5), Some(Difficulty::BeyondEternity));
        assert_eq!(Difficulty::from_u8(6), None);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Future.short_name(), "FTR");
        assert_eq!(Difficulty::BeyondMoment.to_string(), "BYD-M");
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("ftr").unwrap(), Difficulty::Future);
        assert_eq!(parse_difficulty("Present").unwrap(), Difficulty::Present);
        assert_eq!(parse_difficulty("beyond moment").unwrap(), Difficulty::BeyondMoment);
        assert_eq!(parse_difficulty("BYD-E").unwrap(), Difficulty::BeyondEternity);
        assert_eq!(parse_difficulty("3").unwrap(), Difficulty::Beyond);
        assert!(parse_difficulty("hard").is_err());
        assert!(parse_difficulty("9").is_err());
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Past < Difficulty::Future);
        assert!(Difficulty::Beyond < Difficulty::BeyondMoment);
    }
}
