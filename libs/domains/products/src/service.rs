//! Product Service - Business logic layer
//!
//! Every operation returns a complete [`ServiceResponse`]; repository failures
//! are logged here and surfaced as `500` outcomes carrying the failure text.

use axum_helpers::{ServiceResponse, ValidationFailure};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, SortBy};
use crate::query;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, filtered and sorted by `filter`
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ServiceResponse<Vec<Product>> {
        outcome(self.filtered_products(filter).await, "Products found")
    }

    async fn filtered_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.repository.list_all().await?;
        non_empty(query::apply(&products, &filter))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ServiceResponse<Product> {
        outcome(self.find_product(id).await, "Product found")
    }

    async fn find_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Literal substring search, optionally sorted
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        term: &str,
        sort_by: Option<SortBy>,
    ) -> ServiceResponse<Vec<Product>> {
        outcome(self.search_products(term, sort_by).await, "Products found")
    }

    async fn search_products(
        &self,
        term: &str,
        sort_by: Option<SortBy>,
    ) -> ProductResult<Vec<Product>> {
        let mut products = self.repository.search(term).await?;
        if let Some(sort_by) = sort_by {
            query::sort(&mut products, sort_by);
        }
        non_empty(products)
    }

    /// Create a product and return the created record
    #[instrument(skip(self, input), fields(product_id = ?input.id))]
    pub async fn create(&self, input: CreateProduct) -> ServiceResponse<Product> {
        outcome(self.create_product(input).await, "Product created")
    }

    async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.into()))?;

        let Some(name) = input.name else {
            return Err(ProductError::Validation(ValidationFailure::single(
                "name", "Required",
            )));
        };

        let id = match input.id {
            Some(id) => {
                if self.repository.get_by_id(id).await?.is_some() {
                    tracing::warn!(product_id = id, "Creating product with a duplicate id");
                }
                id
            }
            None => self.repository.next_id().await?,
        };

        let product = Product::new(id, name, input.available);
        self.repository.insert(product.clone()).await?;
        tracing::info!(product_id = id, "Product created");

        Ok(product)
    }

    /// Delete an unavailable product and return the removed record
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResponse<Product> {
        outcome(self.delete_product(id).await, "Product deleted")
    }

    async fn delete_product(&self, id: i64) -> ProductResult<Product> {
        let product = self.find_product(id).await?;

        if product.available {
            return Err(ProductError::Available(id));
        }

        self.repository
            .remove_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        tracing::info!(product_id = id, "Product deleted");

        Ok(product)
    }
}

fn non_empty(products: Vec<Product>) -> ProductResult<Vec<Product>> {
    if products.is_empty() {
        Err(ProductError::NoProductsFound)
    } else {
        Ok(products)
    }
}

fn outcome<T>(result: ProductResult<T>, message: &str) -> ServiceResponse<T> {
    match result {
        Ok(value) => ServiceResponse::success(message, value),
        Err(err) => {
            let code = err.code();
            if err.is_internal() {
                tracing::error!(error_code = code.code(), error = %err, "Product repository failure");
            } else {
                tracing::info!(error_code = code.code(), "{}: {}", code, err);
            }
            err.into()
        }
    }
}
