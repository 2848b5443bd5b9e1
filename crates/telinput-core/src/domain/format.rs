use std::str::FromStr;

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// How a successfully parsed number is rendered back into the visible text.
///
/// `Default` shows the bare national digits; the other two use the phone
/// library's national/international renderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Default,
    National,
    International,
}

impl FormatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatMode::Default => "default",
            FormatMode::National => "national",
            FormatMode::International => "international",
        }
    }
}

impl FromStr for FormatMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(FormatMode::Default),
            "national" => Ok(FormatMode::National),
            "international" => Ok(FormatMode::International),
            _ => Err(CoreError::InvalidFormatMode(s.to_string())),
        }
    }
}
