use std::panic;
use std::str::FromStr;

use phonenumber::{country, Mode};
use tracing::{debug, warn};

use crate::domain::ParsedNumber;
use crate::error::CoreError;

mod examples;

/// Fixed contract of the underlying phone-number library.
///
/// The normalizer never talks to the parsing backend directly; everything
/// goes through this seam so hosts and tests can substitute their own.
pub trait PhoneNumberService {
    /// Parses free text, optionally biased by an iso2 country hint.
    fn parse(&self, text: &str, country_hint: Option<&str>) -> Result<ParsedNumber, CoreError>;

    /// National rendering, e.g. "020 7946 0958".
    fn format_national(&self, number: &ParsedNumber) -> String;

    /// International rendering, e.g. "+44 20 7946 0958".
    fn format_international(&self, number: &ParsedNumber) -> String;

    /// Incremental reformatting of partial input. Returns the text
    /// unchanged when it cannot be formatted yet; the caret-guard logic
    /// lives in the normalizer, not here.
    fn format_as_you_type(&self, text: &str, iso2: &str) -> String;

    /// Example number for a country, rendered nationally. Absent when no
    /// example data is bundled for the code.
    fn example_number(&self, iso2: &str) -> Option<String>;
}

/// Default backend over the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

fn country_id(iso2: &str) -> Option<country::Id> {
    country::Id::from_str(&iso2.trim().to_ascii_uppercase()).ok()
}

fn parse_raw(text: &str, hint: Option<country::Id>) -> Result<phonenumber::PhoneNumber, CoreError> {
    let owned = text.to_string();
    // The phonenumber crate is known to panic on some malformed inputs;
    // treat a panic the same as a parse error.
    let result = panic::catch_unwind(move || phonenumber::parse(hint, owned));
    match result {
        Ok(Ok(number)) => Ok(number),
        Ok(Err(err)) => {
            debug!(error = ?err, "phone number parse failed");
            Err(CoreError::ParseFailure)
        }
        Err(_) => {
            warn!(text = %text, "phone number backend panicked during parse");
            Err(CoreError::ParseFailure)
        }
    }
}

/// Bare national digits, derived by dropping the dial-code block from the
/// international rendering. Keeps significant leading zeros intact.
fn national_digits(number: &phonenumber::PhoneNumber) -> String {
    let international = number.format().mode(Mode::International).to_string();
    let rest = match international.split_once(' ') {
        Some((_, rest)) => rest,
        None => international.as_str(),
    };
    rest.chars().filter(char::is_ascii_digit).collect()
}

fn to_parsed(number: &phonenumber::PhoneNumber) -> ParsedNumber {
    ParsedNumber {
        country_iso2: number
            .country()
            .id()
            .map(|id| id.as_ref().to_ascii_lowercase()),
        national_number: national_digits(number),
        e164: number.format().mode(Mode::E164).to_string(),
        is_valid: phonenumber::is_valid(number),
    }
}

impl PhoneNumberService for LibPhoneNumber {
    fn parse(&self, text: &str, country_hint: Option<&str>) -> Result<ParsedNumber, CoreError> {
        let hint = country_hint.and_then(country_id);
        let number = parse_raw(text, hint)?;
        Ok(to_parsed(&number))
    }

    fn format_national(&self, number: &ParsedNumber) -> String {
        match parse_raw(&number.e164, None) {
            Ok(parsed) => parsed.format().mode(Mode::National).to_string(),
            Err(_) => number.national_number.clone(),
        }
    }

    fn format_international(&self, number: &ParsedNumber) -> String {
        match parse_raw(&number.e164, None) {
            Ok(parsed) => parsed.format().mode(Mode::International).to_string(),
            Err(_) => number.e164.clone(),
        }
    }

    fn format_as_you_type(&self, text: &str, iso2: &str) -> String {
        match parse_raw(text, country_id(iso2)) {
            Ok(number) if text.starts_with('+') => {
                number.format().mode(Mode::International).to_string()
            }
            Ok(number) => number.format().mode(Mode::National).to_string(),
            Err(_) => text.to_string(),
        }
    }

    fn example_number(&self, iso2: &str) -> Option<String> {
        let iso2 = iso2.trim().to_ascii_lowercase();
        let digits = examples::EXAMPLE_NUMBERS
            .iter()
            .find(|(code, _)| *code == iso2)
            .map(|(_, digits)| *digits)?;
        match parse_raw(digits, country_id(&iso2)) {
            Ok(number) => Some(number.format().mode(Mode::National).to_string()),
            Err(_) => Some(digits.to_string()),
        }
    }
}
