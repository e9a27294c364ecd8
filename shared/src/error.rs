use serde::{Deserialize, Serialize};
use serde_json::{Error as JsonError, Value};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// No response was received (offline, DNS, CORS, aborted fetch).
    #[error("Network error: {0}")]
    Network(String),

    /// A response was received with a non-2xx status or an `error` envelope.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Message suitable for an inline error or a toast.
    pub fn user_message(&self) -> String {
        match self {
            SharedError::Validation(message) => message.clone(),
            SharedError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            SharedError::Server { message, .. } => message.clone(),
            SharedError::Unauthorized(_) => {
                "Your session has expired. Please log in again.".to_string()
            }
            SharedError::NotFound(what) => format!("{} was not found", what),
            SharedError::Conversion(_) => "The server returned an unexpected response.".to_string(),
            SharedError::MissingField(field) => format!("{} is required", field),
        }
    }

    /// True for failures the user can retry without changing their input.
    pub fn is_transient(&self) -> bool {
        matches!(self, SharedError::Network(_))
            || matches!(self, SharedError::Server { status, .. } if *status >= 500)
    }

    /// Builds a server error from an HTTP status and whatever body came back.
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(server_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        match status {
            401 => SharedError::Unauthorized(message),
            404 => SharedError::NotFound(message),
            _ => SharedError::Server { status, message },
        }
    }
}

/// Extracts a human-readable message from an error payload.
///
/// Structured validation errors under `errors` win over the plain `message`
/// and `error` fields and are flattened one per line.
pub fn server_message(body: &Value) -> Option<String> {
    if let Some(errors) = body.get("errors") {
        let lines = flatten_error_value(None, errors);
        if !lines.is_empty() {
            return Some(lines.join("\n"));
        }
    }

    for key in ["message", "error"] {
        match body.get(key) {
            Some(Value::String(text)) if !text.trim().is_empty() => return Some(text.clone()),
            Some(Value::Object(inner)) => {
                if let Some(Value::String(text)) = inner.get("message") {
                    return Some(text.clone());
                }
            }
            _ => {}
        }
    }

    match body {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn flatten_error_value(field: Option<&str>, value: &Value) -> Vec<String> {
    let prefixed = |text: &str| match field {
        Some(field) => format!("{}: {}", field, text),
        None => text.to_string(),
    };

    match value {
        Value::String(text) => vec![prefixed(text)],
        Value::Array(items) => items
            .iter()
            .flat_map(|item| flatten_error_value(field, item))
            .collect(),
        Value::Object(map) => {
            // express-validator style: { msg, path } / { message, field }
            let text = map
                .get("msg")
                .or_else(|| map.get("message"))
                .and_then(Value::as_str);
            if let Some(text) = text {
                let name = map
                    .get("path")
                    .or_else(|| map.get("field"))
                    .or_else(|| map.get("param"))
                    .and_then(Value::as_str)
                    .or(field);
                return vec![match name {
                    Some(name) => format!("{}: {}", name, text),
                    None => text.to_string(),
                }];
            }
            map.iter()
                .flat_map(|(key, nested)| flatten_error_value(Some(key), nested))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Flattens `validator` errors into messages ordered by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(field, _)| **field);

    let mut messages = Vec::new();
    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                messages.extend(validation_messages(nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    for message in validation_messages(nested) {
                        messages.push(format!("{} #{}: {}", field, index + 1, message));
                    }
                }
            }
        }
    }
    messages
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(validation_messages(&errors).join("\n"))
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
