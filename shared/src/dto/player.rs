use crate::error::Result;
use crate::reference;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

lazy_static! {
    static ref PERSON_NAME_REGEX: Regex = Regex::new(r"^[\p{L}][\p{L} .'-]*$").unwrap();
}

fn validate_position_code(code: &str) -> std::result::Result<(), ValidationError> {
    if reference::is_valid_position(code) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_position");
    error.message = Some(Cow::from(format!(
        "\"{}\" is not a valid position. Allowed: {}",
        code,
        reference::allowed_positions()
    )));
    Err(error)
}

fn validate_known_country(country: &str) -> std::result::Result<(), ValidationError> {
    if reference::canonical_country(country).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("unknown_country");
    error.message = Some(Cow::from(format!("\"{}\" is not a supported country", country)));
    Err(error)
}

/// Body of `PUT /players/{id}`; only the fields present are updated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[validate(regex(path = "PERSON_NAME_REGEX", message = "Name contains invalid characters"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_position_code")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_known_country")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 14, max = 50, message = "Age must be between 14 and 50"))]
    pub age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Club name must be at most 100 characters"))]
    pub current_club: Option<String>,
}

impl UpdatePlayerProfileRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates the update, reporting every failing field.
    pub fn validate_fields(&self) -> Result<()> {
        Ok(self.validate()?)
    }
}
