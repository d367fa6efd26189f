use axum::http::StatusCode;
use axum_helpers::{ErrorCode, ServiceResponse, ValidationFailure};
use thiserror::Error;

/// Domain failures of the catalog.
///
/// `Display` is exactly the message the client sees in the failure envelope;
/// `Repository` carries the store's error text verbatim.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound(i64),

    #[error("No products found")]
    NoProductsFound,

    #[error("Product is available, cannot delete")]
    Available(i64),

    #[error("{0}")]
    Validation(ValidationFailure),

    #[error("{0}")]
    Repository(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) | ProductError::NoProductsFound => StatusCode::NOT_FOUND,
            ProductError::Available(_) | ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Code attached to the failure log line.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProductError::NotFound(_) | ProductError::NoProductsFound => ErrorCode::NotFound,
            ProductError::Available(_) => ErrorCode::BusinessRule,
            ProductError::Validation(_) => ErrorCode::ValidationError,
            ProductError::Repository(_) => ErrorCode::InternalError,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ProductError::Repository(_))
    }
}

impl<T> From<ProductError> for ServiceResponse<T> {
    fn from(err: ProductError) -> Self {
        ServiceResponse::failure(err.to_string(), err.status())
    }
}

impl From<regex::Error> for ProductError {
    fn from(err: regex::Error) -> Self {
        ProductError::Repository(err.to_string())
    }
}
