use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Platform a chart is played on; selects the note count, version and date columns.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Mobile,
    Switch,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
