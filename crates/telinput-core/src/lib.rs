pub mod directory;
pub mod domain;
pub mod error;
pub mod normalizer;
pub mod rules;
pub mod service;

pub use directory::{matches_search, CountryDirectory};
pub use domain::*;
pub use error::CoreError;
pub use normalizer::{
    FocusTarget, NormalizerEvent, NormalizerOptions, PendingCountryUpdate, PhoneInputNormalizer,
};
pub use rules::*;
pub use service::{LibPhoneNumber, PhoneNumberService};
