//! API client for the shop REST API
//!
//! Every request goes through `send`, which attaches the bearer token,
//! logs the call and maps HTTP failures onto `ApiError`.

use std::cell::RefCell;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::{Callable, Callback};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("You are not signed in")]
    NotAuthenticated,
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("{}", .0.as_deref().unwrap_or("You do not have permission for this action"))]
    Forbidden(Option<String>),
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-2xx response onto an error, using the API's `detail`
    /// field when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(detail),
            404 => ApiError::NotFound,
            400 | 409 | 422 => ApiError::Validation(
                detail.unwrap_or_else(|| "The request was rejected".to_string()),
            ),
            _ => ApiError::Server {
                status,
                message: detail.unwrap_or_else(|| "unexpected failure".to_string()),
            },
        }
    }

    /// Credential endpoints answer a bad password with 401; that is a form
    /// error, not an expired session.
    pub fn from_login_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Validation(
                extract_detail(body).unwrap_or_else(|| "Incorrect username or password".to_string()),
            ),
            _ => ApiError::from_status(status, body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }
}

/// `detail` is either a string or a list of `{loc, msg}` objects.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(|l| l.as_array())
                        .and_then(|l| l.last())
                        .and_then(|f| f.as_str());
                    Some(match field {
                        Some(f) => format!("{}: {}", f, msg),
                        None => msg.to_string(),
                    })
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
}

/// Registered by the auth provider; runs after a 401 clears the session.
pub fn set_unauthorized_handler(handler: Callback<()>) {
    UNAUTHORIZED_HANDLER.with(|h| *h.borrow_mut() = Some(handler));
}

fn notify_unauthorized() {
    storage::clear_session();
    let handler = UNAUTHORIZED_HANDLER.with(|h| h.borrow().clone());
    if let Some(handler) = handler {
        handler.run(());
    }
}

/// Base URL for API requests.
///
/// Uses `api.base_url` from the config, or the page host with
/// `api.default_port` when it is empty.
pub fn api_base() -> String {
    let cfg = &config().api;
    if !cfg.base_url.trim().is_empty() {
        return cfg.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, cfg.default_port)
}

/// Build a full API URL from a path like `/products/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends a query string built from `query`; `None` fields must be marked
/// `skip_serializing_if` on the query type.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

fn bearer() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder.header("Authorization", &bearer()?))
}

async fn check(method: &str, path: &str, response: Response, login: bool) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = if login {
        ApiError::from_login_status(status, &body)
    } else {
        ApiError::from_status(status, &body)
    };
    log::warn!("{} {} failed: {}", method, path, error);
    if matches!(error, ApiError::Unauthorized) {
        notify_unauthorized();
    }
    Err(error)
}

async fn dispatch(method: &str, path: &str, request: Request, login: bool) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, path);
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(method, path, response, login).await
}

async fn send(method: &str, path: &str, request: Request) -> Result<Response, ApiError> {
    dispatch(method, path, request, false).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = build(authorized(Request::get(&api_url(path)))?)?;
    decode(send("GET", path, request).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = encode(authorized(Request::post(&api_url(path)))?, body)?;
    decode(send("POST", path, request).await?).await
}

/// POST without a body, for actions such as `/receive`.
pub async fn post_action<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = build(authorized(Request::post(&api_url(path)))?)?;
    decode(send("POST", path, request).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = encode(authorized(Request::put(&api_url(path)))?, body)?;
    decode(send("PUT", path, request).await?).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = encode(authorized(Request::patch(&api_url(path)))?, body)?;
    decode(send("PATCH", path, request).await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = build(authorized(Request::delete(&api_url(path)))?)?;
    send("DELETE", path, request).await?;
    Ok(())
}

/// Form-encoded POST without a bearer token (login).
pub async fn post_form<T: DeserializeOwned>(path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
    let body = form_encode(fields);
    let request = Request::post(&api_url(path))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(dispatch("POST", path, request, true).await?).await
}

pub fn form_encode(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        location_id: Option<i64>,
    }

    #[test]
    fn test_from_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(403, r#"{"detail":"Invalid PIN"}"#),
            ApiError::Forbidden(Some("Invalid PIN".into()))
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"detail":"SKU already exists"}"#),
            ApiError::Validation("SKU already exists".into())
        );
        assert_eq!(
            ApiError::from_status(500, "oops"),
            ApiError::Server { status: 500, message: "unexpected failure".into() }
        );
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[
            {"loc":["body","price"],"msg":"must be >= 0","type":"value_error"},
            {"loc":["body","sku"],"msg":"field required","type":"missing"}
        ]}"#;
        assert_eq!(
            ApiError::from_status(422, body),
            ApiError::Validation("price: must be >= 0; sku: field required".into())
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Validation("Bad".into()).to_string(), "Bad");
        assert_eq!(
            ApiError::Server { status: 502, message: "down".into() }.to_string(),
            "Server error 502: down"
        );
        assert_eq!(ApiError::Forbidden(None).to_string(), "You do not have permission for this action");
        assert_eq!(ApiError::Forbidden(Some("Invalid PIN".into())).to_string(), "Invalid PIN");
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::NotFound.is_unauthorized());
    }

    #[test]
    fn test_with_query() {
        let f = Filter { q: Some("usb".into()), location_id: Some(2) };
        assert_eq!(with_query("/products/", &f), "/products/?q=usb&location_id=2");
        let empty = Filter { q: None, location_id: None };
        assert_eq!(with_query("/products/", &empty), "/products/");
    }

    #[test]
    fn test_login_rejection_keeps_detail() {
        let error = ApiError::from_login_status(401, r#"{"detail":"Incorrect username or password"}"#);
        assert_eq!(error, ApiError::Validation("Incorrect username or password".into()));
        assert_eq!(error.to_string(), "Incorrect username or password");
        assert!(!error.is_unauthorized());
        assert_eq!(
            ApiError::from_login_status(401, ""),
            ApiError::Validation("Incorrect username or password".into())
        );
        assert_eq!(ApiError::from_login_status(404, ""), ApiError::NotFound);
    }

    #[test]
    fn test_form_encode() {
        assert_eq!(
            form_encode(&[("username", "kim"), ("password", "p&ss word")]),
            "username=kim&password=p%26ss%20word"
        );
    }
}
