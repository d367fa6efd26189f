//! # Axum Helpers
//!
//! Shared building blocks for the catalog HTTP API.
//!
//! ## Modules
//!
//! - **[`response`]**: The `ServiceResponse` success/failure envelope
//! - **[`validation`]**: Field violations and `id` parsing rules
//! - **[`errors`]**: Error taxonomy rendered as failure envelopes
//! - **[`extractors`]**: Validating extractors (id path, JSON body, query string)
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_production_app(router, &config, std::time::Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};

pub use response::ServiceResponse;

pub use validation::{FieldViolation, ValidationFailure, validate_id};
