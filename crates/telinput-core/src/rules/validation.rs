use crate::error::CoreError;
use crate::service::PhoneNumberService;

/// Standalone validity check for a committed value. Empty values are
/// acceptable (requiredness is the host's concern); anything else must
/// parse to a valid number.
pub fn validate_phone_value<S: PhoneNumberService>(
    service: &S,
    value: &str,
) -> Result<(), CoreError> {
    if value.is_empty() {
        return Ok(());
    }
    let parsed = service
        .parse(value, None)
        .map_err(|_| CoreError::InvalidPhoneNumber)?;
    if !parsed.is_valid {
        return Err(CoreError::InvalidPhoneNumber);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_phone_value;
    use crate::error::CoreError;
    use crate::service::LibPhoneNumber;

    #[test]
    fn empty_value_is_acceptable() {
        assert!(validate_phone_value(&LibPhoneNumber, "").is_ok());
    }

    #[test]
    fn valid_e164_passes() {
        assert!(validate_phone_value(&LibPhoneNumber, "+442079460958").is_ok());
    }

    #[test]
    fn unparseable_text_is_invalid() {
        assert_eq!(
            validate_phone_value(&LibPhoneNumber, "not a number"),
            Err(CoreError::InvalidPhoneNumber)
        );
    }

    #[test]
    fn raw_national_digits_without_region_are_invalid() {
        assert_eq!(
            validate_phone_value(&LibPhoneNumber, "2025551234"),
            Err(CoreError::InvalidPhoneNumber)
        );
    }
}
