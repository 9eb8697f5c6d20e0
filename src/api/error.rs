use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failures surfaced by the API client.
///
/// Everything except a first-attempt 401 bubbles unchanged to the call site.
/// A first-attempt 401 triggers the refresh path; if that path fails, the
/// caller sees `RefreshFailed` wrapping the cause instead of the original 401.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure before a usable response was received.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The token refresh attempt itself failed; the session has been cleared.
    #[error("token refresh failed: {0}")]
    RefreshFailed(#[source] Box<ApiError>),

    /// A refresh was required but no refresh token was stored.
    #[error("no refresh token stored")]
    MissingRefreshToken,

    /// The response body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request could not be constructed (unserializable body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data in errors.
    /// The cut lands on a char boundary; bodies are often non-ASCII.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn from_status(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: Self::truncate_body(body),
        }
    }

    /// The HTTP status of this error, if it carries one.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for errors that ended the session (terminal refresh failures).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::RefreshFailed(_) | ApiError::MissingRefreshToken
        )
    }
}
