//! Positive integer `id` path parameter extractor.

use crate::errors::AppError;
use crate::validation::{ID_NOT_NUMERIC, ValidationFailure, validate_id};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a strictly positive integer `id` path parameter.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::InvalidId(ValidationFailure::single("id", ID_NOT_NUMERIC)).into_response()
            })?;

        validate_id(&raw)
            .map(IdPath)
            .map_err(|failure| AppError::InvalidId(failure).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/{id}", get(|IdPath(id): IdPath| async move { id.to_string() }))
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_id_reaches_handler() {
        let (status, body) = call("/17").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "17");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let (status, body) = call("/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid input: ID must be a numeric value"));
    }

    #[tokio::test]
    async fn test_negative_id_is_rejected() {
        let (status, body) = call("/-3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("ID must be a positive number"));
    }
}
