use crate::api::error::ApiError;
use log::Level;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed backend call.
    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Critical: expired or missing credentials, wrong role
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Backend trouble the user cannot fix by editing input
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Error,

            // Validation and conflict errors are expected in normal use
            ApiError::Http { .. } => LogLevel::Warn,

            // Client-side bugs
            ApiError::Decode(_) | ApiError::Encode(_) => LogLevel::Error,

            // Network issues
            ApiError::Transport(_) => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: "x".to_string(),
        }
    }

    #[test]
    fn auth_failures_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(403)), LogLevel::Error);
    }

    #[test]
    fn validation_failures_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(400)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(404)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(409)), LogLevel::Warn);
    }

    #[test]
    fn server_failures_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(500)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(503)), LogLevel::Error);
    }

    #[test]
    fn decode_failures_are_errors() {
        let classifier = ErrorClassifier::new();
        let err = ApiError::Decode(serde_json::from_str::<u8>("[]").unwrap_err());
        assert_eq!(classifier.classify_api_error(&err), LogLevel::Error);
    }
}
