use serde_json::Value;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Terjadi kesalahan, silakan coba lagi";
pub const ACCESS_DENIED: &str = "Anda tidak memiliki akses ke halaman ini";
pub const SESSION_EXPIRED: &str = "Sesi berakhir, silakan login kembali";

/// Errors surfaced by the HTTP layer. Every variant ends as a notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Belum login")]
    NotAuthenticated,
    #[error("{}", SESSION_EXPIRED)]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Gagal menghubungi server: {0}")]
    Network(String),
    #[error("Respons server tidak valid: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Maps a non-2xx status and its (possibly empty) body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed.as_ref().and_then(server_message);
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message.unwrap_or_else(|| ACCESS_DENIED.to_string())),
            _ => ApiError::Http {
                status,
                message: message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            },
        }
    }

    /// Text for the failure notification: the server's message when present,
    /// otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Forbidden(message) => message.clone(),
            ApiError::Validation(message) => message.clone(),
            ApiError::Unauthorized => SESSION_EXPIRED.to_string(),
            ApiError::NotAuthenticated => SESSION_EXPIRED.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }
}

/// Picks the human-readable message out of an error or mutation body.
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "error", "detail", "msg"]
        .iter()
        .find_map(|key| match body.get(*key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Object(inner) => inner
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
}

/// Interprets a 2xx mutation body. `{success: false}` is a failure even with
/// a 200 status.
pub fn mutation_outcome(body: &Value) -> Result<Option<String>, ApiError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(true);
    if success {
        Ok(server_message(body))
    } else {
        Err(ApiError::Http {
            status: 200,
            message: server_message(body).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_status_maps_auth_codes() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, ""),
            ApiError::Forbidden(ACCESS_DENIED.to_string())
        );
    }

    #[test]
    fn test_from_status_prefers_server_message() {
        let err = ApiError::from_status(422, r#"{"success":false,"message":"Kode barang sudah dipakai"}"#);
        assert_eq!(err.user_message(), "Kode barang sudah dipakai");

        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_server_message_lookup_order() {
        assert_eq!(
            server_message(&json!({"error": {"message": "nested"}})),
            Some("nested".to_string())
        );
        assert_eq!(server_message(&json!({"message": "  "})), None);
        assert_eq!(
            server_message(&json!({"detail": "Token kedaluwarsa"})),
            Some("Token kedaluwarsa".to_string())
        );
    }

    #[test]
    fn test_mutation_outcome() {
        assert_eq!(
            mutation_outcome(&json!({"success": true, "message": "Tersimpan"})),
            Ok(Some("Tersimpan".to_string()))
        );
        assert!(mutation_outcome(&json!({"success": false})).is_err());
        assert_eq!(mutation_outcome(&json!(null)), Ok(None));
    }
}
