//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

pub use health::ready_router;

/// Create all API routes (mounted under `/api`)
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}
