use reqwest::StatusCode;
use thiserror::Error;

/// Fallback message for failure responses that carry no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// What the user sees when a submission fails.
///
/// The Display output of every variant is the exact string shown in the
/// error line; nothing wraps it in extra prose.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The request never produced an HTTP response (network unreachable,
    /// DNS failure, connection refused).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 2xx with a body that is not a forecast report.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The service rejected the request with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl ForecastError {
    /// Non-2xx response: use the server's message when it sent one.
    pub fn api(status: StatusCode, message: Option<String>) -> Self {
        ForecastError::Api {
            status,
            message: message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = ForecastError::api(
            StatusCode::NOT_FOUND,
            Some("date out of range".to_string()),
        );

        assert_eq!(err.to_string(), "date out of range");
    }

    #[test]
    fn api_error_without_message_displays_unknown_error() {
        let err = ForecastError::api(StatusCode::INTERNAL_SERVER_ERROR, None);

        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn parse_error_displays_underlying_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = source.to_string();

        let err = ForecastError::from(source);

        assert_eq!(err.to_string(), expected);
    }
}
