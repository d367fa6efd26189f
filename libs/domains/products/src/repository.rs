use async_trait::async_trait;
use regex::RegexBuilder;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product storage
///
/// Primitive operations only; business rules live in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of every product in store order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// First product with the given id
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Append a product; no duplicate-id check. Returns the updated collection.
    async fn insert(&self, product: Product) -> ProductResult<Vec<Product>>;

    /// Remove the first product with the given id. Returns the updated
    /// collection, or `None` when no product matched.
    async fn remove_by_id(&self, id: i64) -> ProductResult<Option<Vec<Product>>>;

    /// Literal, case-insensitive substring search on names.
    /// An empty term returns every product.
    async fn search(&self, term: &str) -> ProductResult<Vec<Product>>;

    /// Id for a product created without one: `max(id) + 1`, or 1 when empty
    async fn next_id(&self) -> ProductResult<i64>;
}

/// In-memory store backed by a lock-guarded vector.
///
/// Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Store pre-loaded with [`default_catalog`].
    pub fn seeded() -> Self {
        Self::with_products(default_catalog())
    }
}

/// Seed catalog served when the API starts with seeding enabled.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Fries", true),
        Product::new(2, "Big Mac", true),
        Product::new(3, "Drink", false),
        Product::new(4, "6 pc. McNuggets", true),
        Product::new(5, "12 pc. McNuggets", false),
        Product::new(6, "(New) Cheeseburger", false),
        Product::new(7, "Sundae", true),
    ]
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Vec<Product>> {
        let mut products = self.products.write().await;
        products.push(product);
        Ok(products.clone())
    }

    async fn remove_by_id(&self, id: i64) -> ProductResult<Option<Vec<Product>>> {
        let mut products = self.products.write().await;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(Some(products.clone()))
            }
            None => Ok(None),
        }
    }

    async fn search(&self, term: &str) -> ProductResult<Vec<Product>> {
        if term.is_empty() {
            return self.list_all().await;
        }

        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;

        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| pattern.is_match(&p.name))
            .cloned()
            .collect())
    }

    async fn next_id(&self) -> ProductResult<i64> {
        let products = self.products.read().await;
        match products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ProductError::Repository("No product id left above the current maximum".to_string())
            }),
        }
    }
}
