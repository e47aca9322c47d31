use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    /// A 2xx status other than the one the endpoint promises.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// An authenticated endpoint was called without a session token.
    #[error("not logged in")]
    Unauthenticated,
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::UnexpectedStatus(status) => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the session token was missing or rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthenticated) || self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_unauthorized() {
        let err = ApiError::Status {
            status: 401,
            body: "expired".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "server responded with 401: expired");

        assert!(ApiError::Unauthenticated.is_unauthorized());
        assert_eq!(ApiError::Unauthenticated.status(), None);
        assert!(!ApiError::UnexpectedStatus(200).is_unauthorized());
    }
}
