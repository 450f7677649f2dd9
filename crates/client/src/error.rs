//! Client error taxonomy (the boundary to the backend).

use reqwest::StatusCode;
use thiserror::Error;

use angebot_core::{DomainError, OfferId};

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No session; the request was not sent.
    #[error("not logged in")]
    NotLoggedIn,

    /// 401: credentials rejected or session expired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 403: the account may not access this resource.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Rejected input, either locally or by the backend (400/422).
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure: DNS, connect, timeout, TLS.
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("offer {0} has no PDF content")]
    EmptyDocument(OfferId),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Map a non-success response to an error, preferring the backend's
    /// `message` (or `error`) field over the raw body.
    pub fn from_response(status: StatusCode, path: &str, body: &str) -> Self {
        let message = backend_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(path.to_string()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The session is no longer usable and should be torn down.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_) | ClientError::NotLoggedIn)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string),
        Err(_) if body.len() <= 200 && !body.starts_with('<') => Some(body.to_string()),
        Err(_) => None,
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvariantViolation(msg) | DomainError::InvalidId(msg) => {
                ClientError::Validation(msg)
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
