use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every variant renders the `{success: false, ...}` envelope the API
/// promises: validation failures carry a `message` field, everything else
/// carries an `error` field.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Client input errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors reported by the payment gateway in a structured response
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The gateway produced no structured response (transport failure,
    /// unreadable or unparseable body)
    #[error("Null response received")]
    NullResponse,

    /// Configuration errors (startup only)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(message) => serde_json::json!({
                "success": false,
                "message": message,
            }),
            AppError::Gateway(error) => serde_json::json!({
                "success": false,
                "error": error,
            }),
            AppError::NullResponse => serde_json::json!({
                "success": false,
                "error": self.to_string(),
            }),
            AppError::Configuration(error) => serde_json::json!({
                "success": false,
                "error": error,
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NullResponse => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }
}
