use serde::{Deserialize, Serialize};

/// A song pack and its cover image (`pack_data.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Pack")]
    pub pack: String,
    #[serde(rename = "Image")]
    pub image: String,
}

/// A song background and its image (`background_data.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRecord {
    #[serde(rename = "Background")]
    pub background: String,
    #[serde(rename = "Image")]
    pub image: String,
}
