pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::response::ServiceResponse;
use crate::validation::{INVALID_INPUT_PREFIX, ValidationFailure};

/// Failure envelope as it appears on the wire.
///
/// Only used to document error bodies in OpenAPI; at runtime every failure is a
/// [`ServiceResponse`] with `success: false` and a `null` payload.
///
/// ```json
/// {
///   "success": false,
///   "message": "Invalid input: ID must be a numeric value",
///   "responseObject": null,
///   "statusCode": 400
/// }
/// ```
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable failure message
    pub message: String,
    /// Always `null`
    pub response_object: Option<serde_json::Value>,
    /// Mirrors the HTTP status
    pub status_code: u16,
}

/// Failures raised before or outside a service operation.
///
/// Each variant renders as a failure envelope with the matching HTTP status.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationFailure),

    #[error("{0}")]
    InvalidId(ValidationFailure),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidId(_)
            | AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::QueryExtractorRejection(_) => ErrorCode::InvalidQuery,
        }
    }

    /// Message placed in the envelope.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(failure) | AppError::InvalidId(failure) => failure.message(),
            AppError::JsonExtractorRejection(e) => {
                format!("{}{}", INVALID_INPUT_PREFIX, e.body_text())
            }
            AppError::QueryExtractorRejection(e) => {
                format!("{}{}", INVALID_INPUT_PREFIX, e.body_text())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.client_message();

        tracing::info!(error_code = code.code(), "{}: {}", code, message);

        ServiceResponse::<()>::failure(message, status).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_renders_joined_message() {
        let mut failure = ValidationFailure::single("id", "ID must be a numeric value");
        failure.push("id", "ID must be a positive number");

        let response = AppError::InvalidId(failure).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Invalid input: ID must be a numeric value, ID must be a positive number"
        );
        assert!(body["responseObject"].is_null());
        assert_eq!(body["statusCode"], 400);
    }

    #[test]
    fn test_status_and_code_mapping() {
        let err = AppError::Validation(ValidationFailure::single("name", "Required"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.client_message(), "Invalid input: Required");

        let err = AppError::InvalidId(ValidationFailure::single("id", "ID must be a positive number"));
        assert_eq!(err.code(), ErrorCode::InvalidId);
    }
}
