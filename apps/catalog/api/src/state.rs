//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
///
/// The repository is cheap to clone; every clone addresses the same store.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
}
