use reqwest::Error as ReqwestError;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum ApiError {
    Authentication(String),
    JsonParseError(serde_json::Error),
    Status { status: u16, message: String },
    RateLimited { retry_after: Option<Duration> },
    ReqwestError(ReqwestError),
}

impl ApiError {
    /// Whether a failed call is worth repeating after a pause.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::RateLimited { .. } => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::ReqwestError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Authentication(s) => write!(f, "Authentication failed: {}", s),
            ApiError::JsonParseError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::Status { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            ApiError::RateLimited { retry_after } => match retry_after {
                Some(delay) => write!(f, "Rate limited, retry after {}s", delay.as_secs()),
                None => write!(f, "Rate limited"),
            },
            ApiError::ReqwestError(e) => write!(f, "Reqwest error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::JsonParseError(error)
    }
}

impl From<ReqwestError> for ApiError {
    fn from(error: ReqwestError) -> Self {
        ApiError::ReqwestError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::RateLimited { retry_after: None }.is_transient());
        assert!(ApiError::Status {
            status: 503,
            message: "Service unavailable".to_string()
        }
        .is_transient());
        assert!(!ApiError::Status {
            status: 404,
            message: "Not found".to_string()
        }
        .is_transient());
        assert!(!ApiError::Authentication("bad secret".to_string()).is_transient());

        let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ApiError::from(malformed).is_transient());
    }

    #[test]
    fn test_display_messages() {
        let err = ApiError::Status {
            status: 404,
            message: "non existing id".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): non existing id");

        let err = ApiError::RateLimited {
            retry_after: Some(Duration::from_secs(3)),
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 3s");
    }
}
