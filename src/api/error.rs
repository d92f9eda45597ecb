//! Error handling for the API module

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// No response was received, typically a connection failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body could not be decoded.
    #[error("Decoding error: {0}")]
    Decode(serde_json::Error),

    /// A request body could not be encoded.
    #[error("Encoding error: {0}")]
    Encode(serde_json::Error),
}

/// Error bodies seen from the backend: `{"error": ..}` from the routes and
/// `{"msg": ..}` from the JWT layer.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http {
            status,
            message: Self::extract_message(&body, status),
        }
    }

    fn extract_message(body: &str, status: u16) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.error.or(parsed.msg).or(parsed.message) {
                return message;
            }
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            trimmed.to_string()
        }
    }

    /// The message the server supplied, if the server responded at all.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_errors_use_error_field() {
        let message = ApiError::extract_message(r#"{"error": "Invalid credentials"}"#, 401);
        assert_eq!(message, "Invalid credentials");
    }

    #[test]
    fn jwt_errors_use_msg_field() {
        let message = ApiError::extract_message(r#"{"msg": "Missing Authorization Header"}"#, 401);
        assert_eq!(message, "Missing Authorization Header");
    }

    #[test]
    fn non_json_bodies_are_passed_through() {
        assert_eq!(
            ApiError::extract_message("<h1>Bad Gateway</h1>\n", 502),
            "<h1>Bad Gateway</h1>"
        );
        assert_eq!(
            ApiError::extract_message("", 500),
            "Request failed with status 500"
        );
    }

    #[test]
    fn only_http_errors_carry_a_server_message() {
        let err = ApiError::Http {
            status: 403,
            message: "Admin access required".into(),
        };
        assert_eq!(err.server_message(), Some("Admin access required"));
        assert_eq!(err.status(), Some(403));

        let decode = ApiError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(decode.server_message(), None);
        assert_eq!(decode.status(), None);
    }
}
