use crate::credentials::CredentialStore;
use gloo_net::http::{Request, RequestBuilder};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use shared::{decode_envelope, ApiEnvelope, Page, Result, SharedError};

/// Creates a request carrying `Authorization: Bearer <token>` when the store
/// holds a token.
pub fn authenticated_request(
    method: &str,
    url: &str,
    store: &dyn CredentialStore,
) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url),
    };

    if let Some(value) = bearer_header(store) {
        req = req.header("Authorization", &value);
    }
    req
}

pub fn authenticated_get(url: &str, store: &dyn CredentialStore) -> RequestBuilder {
    authenticated_request("GET", url, store)
}

pub fn authenticated_post(url: &str, store: &dyn CredentialStore) -> RequestBuilder {
    authenticated_request("POST", url, store)
}

pub fn authenticated_put(url: &str, store: &dyn CredentialStore) -> RequestBuilder {
    authenticated_request("PUT", url, store)
}

pub fn bearer_header(store: &dyn CredentialStore) -> Option<String> {
    store
        .get()
        .filter(|token| !token.trim().is_empty())
        .map(|token| format!("Bearer {}", token))
}

/// URL-encoded query string, including the leading `?` when non-empty.
pub fn query_string(params: &[(&str, String)]) -> String {
    let mut qs = String::new();
    for (i, (k, v)) in params.iter().enumerate() {
        qs.push(if i == 0 { '?' } else { '&' });
        qs.push_str(&urlencoding::encode(k));
        qs.push('=');
        qs.push_str(&urlencoding::encode(v));
    }
    qs
}

pub fn network_error(e: gloo_net::Error) -> SharedError {
    SharedError::Network(e.to_string())
}

/// Decodes a raw response. A 401 also clears the stored token so the next
/// request goes out anonymous.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    store: &dyn CredentialStore,
) -> Result<ApiEnvelope<T>> {
    let decoded = decode_envelope::<T>(status, body);
    if let Err(SharedError::Unauthorized(message)) = &decoded {
        warn!("Request rejected as unauthorized: {}", message);
        store.clear();
    }
    decoded
}

async fn execute(request: Request) -> Result<(u16, String)> {
    let method = request.method();
    let url = request.url();
    debug!("{} {}", method, url);
    let response = request.send().await.map_err(network_error)?;
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    debug!("{} {} -> {}", method, url, status);
    Ok((status, body))
}

/// Sends a request and unwraps the envelope's `data`.
pub async fn fetch_data<T: DeserializeOwned>(
    request: Request,
    store: &dyn CredentialStore,
) -> Result<T> {
    let (status, body) = execute(request).await?;
    decode_response::<T>(status, &body, store)?.into_data(status)
}

/// Sends a request for a paginated list.
pub async fn fetch_page<T: DeserializeOwned>(
    request: Request,
    store: &dyn CredentialStore,
) -> Result<Page<T>> {
    let (status, body) = execute(request).await?;
    decode_response::<Vec<T>>(status, &body, store)?.into_page(status)
}
