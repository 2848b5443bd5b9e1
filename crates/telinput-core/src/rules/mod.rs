pub mod error_state;
pub mod validation;

pub use error_state::evaluate_error_state;
pub use validation::validate_phone_value;
