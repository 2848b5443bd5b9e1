use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One row of the country directory. Immutable once built; `placeholder`
/// is filled from example-number data when the host enables placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso2: String,
    pub name: String,
    pub dial_code: Option<String>,
    pub priority: u8,
    pub area_codes: Vec<String>,
    pub placeholder: Option<String>,
}

impl Country {
    /// Sentinel returned on directory misses. Callers rely on lookups never
    /// coming back absent, so an unknown code resolves to this row.
    pub fn unknown() -> Self {
        Self {
            iso2: "UN".to_string(),
            name: "UN".to_string(),
            dial_code: None,
            priority: 0,
            area_codes: Vec::new(),
            placeholder: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.iso2 == "UN"
    }
}

/// Normalizes a user-supplied ISO 3166-1 alpha-2 code to canonical lowercase.
pub fn normalize_iso2(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidIso2(raw.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}
