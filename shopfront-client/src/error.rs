//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this error means the session is no longer authenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// User-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Http(e) => format!("Request failed: {}", e),
            Self::InvalidResponse(m) => format!("Invalid response: {}", m),
            Self::Unauthorized => "Please login first".to_string(),
            Self::NotFound(m) => m.clone(),
            Self::Validation(m) => m.clone(),
            Self::Internal(m) => m.clone(),
            Self::Serialization(e) => format!("Invalid response: {}", e),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Map an HTTP response onto the [`ClientError`] taxonomy.
///
/// Error bodies carry a `{ "message": ... }` field; when present it becomes
/// the error text, otherwise the raw body is used.
pub async fn handle_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = server_message(&text).unwrap_or(text);
        return match status {
            reqwest::StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            reqwest::StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
            _ => Err(ClientError::Internal(message)),
        };
    }

    response.json().await.map_err(Into::into)
}

/// Extract the `message` field from an error body, if the body is JSON.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}
