//! Field rules shared by the wizard steps and the profile editor.

use crate::reference;
use crate::transforms::video::extract_youtube_id;
use chrono::{Datelike, NaiveDate, Utc};
use std::borrow::Cow;
use validator::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_match_date(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error("required", "Match date is required".to_string()));
    }
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| error("invalid_date", "Match date must be in YYYY-MM-DD format".to_string()))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn validate_youtube_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Video link is required".to_string()));
    }
    match extract_youtube_id(value) {
        Some(_) => Ok(()),
        None => Err(error(
            "invalid_video_url",
            "Video link must be a valid YouTube URL".to_string(),
        )),
    }
}

pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    if has_scheme && validator::validate_url(value) {
        Ok(())
    } else {
        Err(error(
            "invalid_url",
            "Website must be a valid http(s) URL".to_string(),
        ))
    }
}

pub fn validate_country(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Country is required".to_string()));
    }
    match reference::canonical_country(value) {
        Some(_) => Ok(()),
        None => Err(error(
            "unknown_country",
            format!("\"{}\" is not a supported country", value.trim()),
        )),
    }
}

pub fn validate_level(value: &str) -> Result<(), ValidationError> {
    one_of("Level", value, reference::CLUB_LEVELS)
}

pub fn validate_gender(value: &str) -> Result<(), ValidationError> {
    one_of("Gender", value, reference::GENDERS)
}

fn one_of(label: &str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error("required", format!("{} is required", label)));
    }
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(error(
        "not_allowed",
        format!(
            "\"{}\" is not a valid {}. Allowed: {}",
            value,
            label.to_lowercase(),
            allowed.join(", ")
        ),
    ))
}

pub fn validate_founded_year(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let current = Utc::now().year();
    match value.parse::<i32>() {
        Ok(year) if (1850..=current).contains(&year) => Ok(()),
        _ => Err(error(
            "invalid_year",
            format!("Founded year must be between 1850 and {}", current),
        )),
    }
}

/// Parses a jersey number typed into a form, accepting 1 to 99.
pub fn parse_jersey_number(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=99).contains(n))
}

pub fn invalid_position_message(value: &str) -> String {
    format!(
        "\"{}\" is not a valid position. Allowed: {}",
        value,
        reference::allowed_positions()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn message(result: Result<(), ValidationError>) -> String {
        result
            .unwrap_err()
            .message
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_match_date_rules() {
        assert!(validate_match_date("2024-09-14").is_ok());
        assert_eq!(message(validate_match_date("")), "Match date is required");
        assert_eq!(
            message(validate_match_date("14/09/2024")),
            "Match date must be in YYYY-MM-DD format"
        );
    }

    #[test]
    fn test_enumerated_values_list_allowed_set() {
        assert!(validate_level("Academy").is_ok());
        assert_eq!(
            message(validate_gender("Other")),
            "\"Other\" is not a valid gender. Allowed: Male, Female, Mixed"
        );
    }

    #[test_case("", true)]
    #[test_case("https://fc-alpha.example.com", true)]
    #[test_case("ftp://fc-alpha.example.com", false)]
    #[test_case("fc-alpha", false)]
    fn test_optional_url(value: &str, ok: bool) {
        assert_eq!(validate_optional_url(value).is_ok(), ok);
    }

    #[test_case("https://youtu.be/dQw4w9WgXcQ", true)]
    #[test_case("hello-world", false)]
    #[test_case("dQw4w9WgXcQ", false)]
    #[test_case("https://notyoutube.com/watch?v=dQw4w9WgXcQ", false)]
    fn test_video_link_must_be_youtube(value: &str, ok: bool) {
        assert_eq!(validate_youtube_url(value).is_ok(), ok);
    }

    #[test_case("9", Some(9))]
    #[test_case(" 99 ", Some(99))]
    #[test_case("0", None)]
    #[test_case("100", None)]
    #[test_case("7a", None)]
    fn test_jersey_number(value: &str, expected: Option<u8>) {
        assert_eq!(parse_jersey_number(value), expected);
    }

    #[test]
    fn test_founded_year() {
        assert!(validate_founded_year("").is_ok());
        assert!(validate_founded_year("1899").is_ok());
        assert!(validate_founded_year("1700").is_err());
        assert!(validate_founded_year("next year").is_err());
    }
}
