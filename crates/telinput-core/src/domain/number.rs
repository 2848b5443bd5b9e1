use serde::{Deserialize, Serialize};

/// Result of a successful parse from the phone-number service.
///
/// `national_number` holds the bare national digits (no dial code, no
/// punctuation); `e164` is the primary canonical representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumber {
    pub country_iso2: Option<String>,
    pub national_number: String,
    pub e164: String,
    pub is_valid: bool,
}
