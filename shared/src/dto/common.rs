use crate::error::{server_message, Result, SharedError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Pagination block returned by paginated list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Pagination {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Response envelope used by every endpoint: `{status, message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One page of a paginated collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps `data`, turning an `error` status into a server error.
    pub fn into_data(self, http_status: u16) -> Result<T> {
        match self.status {
            ApiStatus::Success => self
                .data
                .ok_or_else(|| SharedError::MissingField("data".to_string())),
            ApiStatus::Error => {
                let message = if self.message.trim().is_empty() {
                    format!("Request failed with status {}", http_status)
                } else {
                    self.message
                };
                Err(SharedError::Server {
                    status: http_status,
                    message,
                })
            }
        }
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// A list response without a pagination block is treated as a single page.
    pub fn into_page(self, http_status: u16) -> Result<Page<T>> {
        let pagination = self.pagination;
        let items = self.into_data(http_status)?;
        let pagination = pagination.unwrap_or(Pagination {
            page: 1,
            total_pages: 1,
            total_items: items.len() as u64,
        });
        Ok(Page { items, pagination })
    }
}

/// Decodes a response body at the API boundary.
///
/// Non-2xx statuses become `Server`/`Unauthorized`/`NotFound` with the message
/// taken from the body; 2xx bodies must be a well-formed envelope.
pub fn decode_envelope<T>(http_status: u16, body: &str) -> Result<ApiEnvelope<T>>
where
    T: serde::de::DeserializeOwned,
{
    if !(200..300).contains(&http_status) {
        let value: Option<Value> = serde_json::from_str(body).ok();
        let value = value.or_else(|| {
            let text = body.trim();
            (!text.is_empty()).then(|| Value::String(text.to_string()))
        });
        return Err(SharedError::from_response(http_status, value.as_ref()));
    }

    let raw: Value = serde_json::from_str(body)?;
    if raw.get("status").and_then(Value::as_str) == Some("error") {
        let message = server_message(&raw)
            .unwrap_or_else(|| format!("Request failed with status {}", http_status));
        return Err(SharedError::Server {
            status: http_status,
            message,
        });
    }
    Ok(serde_json::from_value(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::club::Club;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_envelope_unwraps_data() {
        let body = r#"{"status":"success","message":"ok","data":[{"id":"c1","name":"FC Alpha"}]}"#;
        let clubs = decode_envelope::<Vec<Club>>(200, body)
            .unwrap()
            .into_data(200)
            .unwrap();
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].name, "FC Alpha");
    }

    #[test]
    fn test_paginated_envelope() {
        let body = concat!(
            r#"{"status":"success","message":"","data":[],"#,
            r#""pagination":{"page":2,"totalPages":3,"totalItems":41}}"#,
        );
        let page = decode_envelope::<Vec<Club>>(200, body)
            .unwrap()
            .into_page(200)
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.page, 2);
        assert!(page.pagination.has_more());
    }

    #[test]
    fn test_missing_pagination_is_single_page() {
        let body = r#"{"status":"success","data":[{"id":"c1","name":"A"},{"id":"c2","name":"B"}]}"#;
        let page = decode_envelope::<Vec<Club>>(200, body)
            .unwrap()
            .into_page(200)
            .unwrap();
        assert_eq!(
            page.pagination,
            Pagination { page: 1, total_pages: 1, total_items: 2 }
        );
        assert!(!page.pagination.has_more());
    }

    #[test]
    fn test_error_status_in_2xx_body() {
        let body = r#"{"status":"error","message":"Club name taken","data":null}"#;
        let err = decode_envelope::<Club>(200, body).unwrap_err();
        assert_eq!(
            err,
            SharedError::Server { status: 200, message: "Club name taken".to_string() }
        );
    }

    #[test]
    fn test_non_2xx_with_validation_errors() {
        let body = concat!(
            r#"{"status":"error","message":"Validation failed","#,
            r#""errors":[{"msg":"Invalid video URL","path":"videoUrl"}]}"#,
        );
        let err = decode_envelope::<Club>(422, body).unwrap_err();
        assert_eq!(err.user_message(), "videoUrl: Invalid video URL");
    }

    #[test]
    fn test_non_2xx_plain_text_body() {
        let err = decode_envelope::<Club>(503, "Service Unavailable").unwrap_err();
        assert_eq!(err.user_message(), "Service Unavailable");
    }

    #[test]
    fn test_malformed_success_body_is_conversion_error() {
        let err = decode_envelope::<Club>(200, "<html>").unwrap_err();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    /// A payload type with no `Default` impl
    #[derive(Debug, serde::Deserialize)]
    struct Created {
        id: String,
    }

    #[test]
    fn test_payload_without_default_decodes() {
        let envelope =
            decode_envelope::<Created>(201, r#"{"status":"success","data":{"id":"c9"}}"#).unwrap();
        assert_eq!(envelope.into_data(201).unwrap().id, "c9");

        let empty = decode_envelope::<Created>(201, r#"{"status":"success"}"#).unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_success_without_data() {
        let envelope = decode_envelope::<Club>(201, r#"{"status":"success"}"#).unwrap();
        assert_eq!(
            envelope.into_data(201).unwrap_err(),
            SharedError::MissingField("data".to_string())
        );
    }
}
