use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorCode;
use crate::response::ServiceResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback so unknown paths still answer with an envelope.
pub async fn not_found() -> Response {
    ServiceResponse::<()>::failure(ErrorCode::NotFound.default_message(), StatusCode::NOT_FOUND)
        .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    ServiceResponse::<()>::failure(
        ErrorCode::MethodNotAllowed.default_message(),
        StatusCode::METHOD_NOT_ALLOWED,
    )
    .into_response()
}
