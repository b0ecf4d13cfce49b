use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Raw failure reported by the document store.
    DatabaseError(String),
    /// 400 `{error, details?}`
    InvalidRequest {
        error: String,
        details: Option<String>,
    },
    /// 404 `{error}`
    NotFound(String),
    /// 401 `{message: "Invalid credentials"}`
    InvalidCredentials,
    /// 500 `{message: "Server error", details}`
    ServerError(String),
    /// 500 `{error, details}`
    FetchFailed { error: String, details: String },
}

impl AppError {
    pub fn invalid(error: impl Into<String>) -> Self {
        AppError::InvalidRequest {
            error: error.into(),
            details: None,
        }
    }

    pub fn invalid_with(error: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::InvalidRequest {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// Message carried by the error, without the variant prefix.
    pub fn details(&self) -> String {
        match self {
            AppError::DatabaseError(msg) => msg.clone(),
            AppError::InvalidRequest { error, details } => {
                details.clone().unwrap_or_else(|| error.clone())
            }
            AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::ServerError(details) => details.clone(),
            AppError::FetchFailed { details, .. } => details.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidRequest { error, details: Some(details) } => {
                write!(f, "Invalid request: {} ({})", error, details)
            }
            AppError::InvalidRequest { error, details: None } => {
                write!(f, "Invalid request: {}", error)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::ServerError(details) => write!(f, "Server error: {}", details),
            AppError::FetchFailed { error, details } => write!(f, "{}: {}", error, details),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::ServerError(_) | AppError::FetchFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::DatabaseError(msg) => serde_json::json!({
                "error": "Database error",
                "details": msg
            }),
            AppError::InvalidRequest { error, details: Some(details) } => serde_json::json!({
                "error": error,
                "details": details
            }),
            AppError::InvalidRequest { error, details: None } => serde_json::json!({
                "error": error
            }),
            AppError::NotFound(msg) => serde_json::json!({ "error": msg }),
            AppError::InvalidCredentials => serde_json::json!({ "message": "Invalid credentials" }),
            AppError::ServerError(details) => serde_json::json!({
                "message": "Server error",
                "details": details
            }),
            AppError::FetchFailed { error, details } => serde_json::json!({
                "error": error,
                "details": details
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}
