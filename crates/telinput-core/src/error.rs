use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unparseable phone number text")]
    ParseFailure,
    #[error("invalid phone number")]
    InvalidPhoneNumber,
    #[error("invalid country code: {0}")]
    InvalidIso2(String),
    #[error("invalid format mode: {0}")]
    InvalidFormatMode(String),
    #[error("country list is empty after filtering")]
    EmptyCountryList,
}
