use thiserror::Error;

/// Failure modes of a gateway call.
///
/// `Auth` is the subset of envelope failures that also tears down the
/// session; it is surfaced separately so callers can distinguish "the
/// server said no" from "you are no longer logged in".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Network-level failure: the request never produced a server envelope.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success envelope.
    #[error("api error {code}: {message}")]
    Api { code: i32, message: String },

    /// Invalid or expired credentials; the session has been invalidated.
    #[error("authentication error {code}: {message}")]
    Auth { code: i32, message: String },

    /// The response body could not be decoded as an envelope or payload.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// The user-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            AppError::Transport(msg) | AppError::Decode(msg) => msg,
            AppError::Api { message, .. } | AppError::Auth { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AppError::Api {
            code: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "api error 500: internal error");
        assert_eq!(err.message(), "internal error");
    }

    #[test]
    fn test_auth_error_is_distinct_from_api() {
        let api = AppError::Api {
            code: 401,
            message: "expired".to_string(),
        };
        let auth = AppError::Auth {
            code: 401,
            message: "expired".to_string(),
        };
        assert_ne!(api, auth);
    }
}
