//! HTTP plumbing shared by every feature `api.rs`.
//!
//! All calls go through [`gloo_net::http::Request`] with the bearer token
//! from local storage. Non-2xx answers become [`ApiError`]; a 401 also ends
//! the session so the shell falls back to the login screen.

use contracts::shared::api::{mutation_outcome, ApiError};
use contracts::shared::list_query::{normalize_list, ListQuery, ListResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::config::config;
use crate::system::auth::{context, storage};

/// Base URL for API requests: same host the bundle was served from, backend
/// port and prefix from configuration.
///
/// Returns an empty string outside a browser window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_base(&protocol, &hostname, config().api.port, &config().api.prefix)
}

fn format_base(protocol: &str, hostname: &str, port: u16, prefix: &str) -> String {
    format!("{}//{}:{}{}", protocol, hostname, port, prefix)
}

/// Full URL for a path relative to the API prefix, e.g. `/supplier`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

fn authorized(verb: Verb, path: &str) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    let url = api_url(path);
    log::debug!("{} {}", verb.as_str(), url);
    Ok(verb
        .builder(&url)
        .header("Authorization", &format!("Bearer {}", token)))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Turns a failed status into an error, ending the session on 401.
async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::warn!("{} -> {}: {}", response.url(), status, error);
    if error.is_unauthorized() {
        context::end_session();
    }
    Err(error)
}

async fn read_value(response: Response) -> Result<Value, ApiError> {
    check_status(&response).await?;
    let text = response.text().await.map_err(network)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Unwraps `{success, data}` when present and deserializes the payload.
pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if let Value::Object(obj) = &value {
        if obj.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(mutation_outcome(&value).err().unwrap_or_else(|| {
                ApiError::Decode("success: false".to_string())
            }));
        }
        if obj.contains_key("success") {
            if let Some(data) = obj.get("data") {
                return serde_json::from_value(data.clone())
                    .map_err(|e| ApiError::Decode(e.to_string()));
            }
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_value(path: &str) -> Result<Value, ApiError> {
    let response = authorized(Verb::Get, path)?
        .send()
        .await
        .map_err(network)?;
    read_value(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode_payload(get_value(path).await?)
}

/// Fetches one page of a list endpoint. Never fails on shape; only on
/// transport or status.
pub async fn fetch_list<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<ListResponse<T>, ApiError> {
    let value = get_value(&format!("{}{}", path, query.to_query_string())).await?;
    Ok(normalize_list(Some(&value), &query.pagination))
}

/// Sends a mutation and interprets `{success, message}`. Returns the body so
/// callers can pick out created ids.
pub async fn send_json<B: Serialize>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<Value, ApiError> {
    let builder = authorized(verb, path)?;
    let response = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?,
        None => builder.send().await.map_err(network)?,
    };
    let value = read_value(response).await?;
    mutation_outcome(&value)?;
    Ok(value)
}

pub async fn delete(path: &str) -> Result<Value, ApiError> {
    send_json::<()>(Verb::Delete, path, None).await
}

/// POST without a bearer token (login, refresh).
pub async fn post_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    let value: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_payload(value)
}

/// Downloaded file body plus its response headers of interest.
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

pub async fn get_blob(path: &str) -> Result<Download, ApiError> {
    let response = authorized(Verb::Get, path)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response).await?;
    let headers = response.headers();
    Ok(Download {
        content_type: headers.get("content-type"),
        content_disposition: headers.get("content-disposition"),
        bytes: response.binary().await.map_err(network)?,
    })
}

/// Multipart upload; the browser sets the boundary header itself.
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<Value, ApiError> {
    let response = authorized(Verb::Post, path)?
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let value = read_value(response).await?;
    mutation_outcome(&value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::LoginResponse;
    use serde_json::json;

    #[test]
    fn test_base_uses_configured_port_and_prefix() {
        assert_eq!(
            format_base("https:", "ksm.local", 5000, "/api"),
            "https://ksm.local:5000/api"
        );
    }

    #[test]
    fn test_decode_payload_unwraps_envelope() {
        let body = json!({
            "success": true,
            "data": {
                "access_token": "a",
                "refresh_token": "r",
                "user": {"id": 1, "username": "admin", "full_name": null, "email": null, "role": "admin"}
            }
        });
        let login: LoginResponse = decode_payload(body).unwrap();
        assert_eq!(login.access_token, "a");
        assert!(login.user.is_admin());
    }

    #[test]
    fn test_decode_payload_accepts_bare_object() {
        let id: Value = decode_payload(json!({"id": 9})).unwrap();
        assert_eq!(id["id"], 9);
    }

    #[test]
    fn test_decode_payload_rejects_unsuccessful_body() {
        let err = decode_payload::<Value>(json!({"success": false, "message": "Data tidak ditemukan"}))
            .unwrap_err();
        assert_eq!(err.user_message(), "Data tidak ditemukan");
    }
}
