use contracts::shared::api::ApiError;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{api_url, decode_payload, post_public};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_public("/auth/login", &request).await
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    post_public("/auth/refresh", &request).await
}

/// Revoke the refresh token server-side. Failures are not fatal.
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    post_public::<_, Value>("/auth/logout", &request)
        .await
        .map(|_| ())
}

/// Profile for an explicit token. Used while restoring a session, so a 401
/// here must not tear the session down before a refresh is attempted.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

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
