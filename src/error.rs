use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidArgument(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidArgument(rejection.body_text())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub status: u16,
    pub message: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Unexpected(msg) => error!("unexpected error: {}", msg),
            other => warn!("api error ({}): {}", status, other),
        }

        let body = Json(ApiErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_body_carries_status_and_message() {
        let response = AppError::NotFound("course not found with id: 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("Failed to parse body");
        assert_eq!(body.status, 404);
        assert_eq!(body.message, "course not found with id: 7");
        assert!(body.timestamp > 0);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::InvalidArgument(String::new()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound(String::new()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Unexpected(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
