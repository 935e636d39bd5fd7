//! API error types for the OANDA REST client.

use thiserror::Error;

/// Substring whose presence in a response body marks a service-level error.
pub const ERROR_MARKER: &str = "errorMessage";

/// API-specific error type for the OANDA REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but the body reports an error
    #[error("OANDA API Error: {body}. Route: {route}")]
    Oanda {
        /// Endpoint path the request was sent to
        route: String,
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
        /// Best-effort parse of `body`
        response: ErrorResponse,
    },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing or malformed client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build the service-level error for a body that carries the error marker.
    pub fn oanda(route: &str, status: u16, body: String) -> Self {
        let response = serde_json::from_str::<ErrorResponse>(&body)
            .unwrap_or_else(|_| ErrorResponse::from_text(body.clone()));
        ApiError::Oanda {
            route: route.to_string(),
            status,
            body,
            response,
        }
    }

    /// The service error message, if this is a service-level error.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ApiError::Oanda { response, .. } => Some(response.get_message()),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body format returned by the v20 API.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(default)]
    pub error_message: Option<String>,
    /// Machine-readable error code
    #[serde(default)]
    pub error_code: Option<String>,
    /// Reject reason attached to rejected transactions
    #[serde(default)]
    pub reject_reason: Option<String>,
}

impl ErrorResponse {
    /// Wrap a body that is not valid JSON.
    pub fn from_text(text: String) -> Self {
        Self {
            error_message: Some(text),
            ..Default::default()
        }
    }

    /// Get the error message, preferring `errorMessage` over `rejectReason`.
    pub fn get_message(&self) -> String {
        self.error_message
            .clone()
            .or_else(|| self.reject_reason.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
