//! Uniform success/failure envelope returned by every API operation.
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Product not found",
//!   "responseObject": null,
//!   "statusCode": 404
//! }
//! ```
//!
//! The transport writes `statusCode` as the HTTP status and the whole envelope
//! (including `statusCode`) as the JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    success: bool,
    message: String,
    response_object: Option<T>,
    status_code: u16,
}

impl<T> ServiceResponse<T> {
    /// Successful outcome with HTTP 200.
    pub fn success(message: impl Into<String>, response_object: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: Some(response_object),
            status_code: StatusCode::OK.as_u16(),
        }
    }

    /// Failed outcome. A failure never carries a payload.
    pub fn failure(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code: status.as_u16(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn response_object(&self) -> Option<&T> {
        self.response_object.as_ref()
    }

    pub fn into_response_object(self) -> Option<T> {
        self.response_object
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
