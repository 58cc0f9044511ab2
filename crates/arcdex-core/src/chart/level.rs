use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Chart level, encoded as `2 * n` for `n` and `2 * n + 1` for `n+`.
///
/// The encoding keeps `9 < 9+ < 10` ordered as plain integers, which is what
/// level range filters and the `Level` column rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Level(u8);

impl Level {
    pub const MAX_BASE: u8 = 127;

    pub fn new(base: u8, plus: bool) -> Self {
        Self(base * 2 + u8::from(plus))
    }

    pub fn from_encoded(encoded: u8) -> Self {
        Self(encoded)
    }

    pub fn encoded(self) -> u8 {
        self.0
    }

    pub fn base(self) -> u8 {
        self.0 / 2
    }

    pub fn is_plus(self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plus() {
            write!(f, "{}+", self.base())
        } else {
            write!(f, "{}", self.base())
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, plus) = match trimmed.strip_suffix('+') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };
        let base: u8 = digits
            .parse()
            .map_err(|_| Error::invalid_field("Level", s))?;
        if base > Self::MAX_BASE {
            return Err(Error::invalid_field("Level", s));
        }
        Ok(Self::new(base, plus))
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        value.0
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
