use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Game client version such as `5.10.2` or `1.0.0a`.
///
/// Ordering is component-wise; a lettered hotfix sorts after its plain release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GameVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub suffix: Option<char>,
}

impl GameVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            suffix: None,
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = self.suffix {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl FromStr for GameVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::invalid_field("Version", s);
        let mut parts = s.trim().split('.');
        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let last = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let (patch, suffix) = match last.chars().last() {
            Some(c) if c.is_ascii_lowercase() => (&last[..last.len() - 1], Some(c)),
            _ => (last, None),
        };

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
            patch: patch.parse().map_err(|_| invalid())?,
            suffix,
        })
    }
}

impl From<GameVersion> for String {
    fn from(value: GameVersion) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for GameVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let v: GameVersion = "5.10.2a".parse().unwrap();
        assert_eq!((v.major, v.minor, v.patch, v.suffix), (5, 10, 2, Some('a')));
        assert_eq!(v.to_string(), "5.10.2a");

        assert!("1.0".parse::<GameVersion>().is_err());
        assert!("1.0.0.0".parse::<GameVersion>().is_err());
        assert!("nan".parse::<GameVersion>().is_err());
        assert!("1.x.0".parse::<GameVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        let v = |s: &str| s.parse::<GameVersion>().unwrap();
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("3.0.0") < v("3.0.0a"));
        assert!(v("3.0.0a") < v("3.0.0b"));
        assert!(v("3.0.0b") < v("3.0.1"));
    }
}
