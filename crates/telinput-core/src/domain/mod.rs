pub mod country;
pub mod form_state;
pub mod format;
pub mod number;

pub use country::{normalize_iso2, Country};
pub use form_state::FormFieldState;
pub use format::FormatMode;
pub use number::ParsedNumber;
