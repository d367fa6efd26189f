//! HTTP handlers for Products API

use axum::{
    Router,
    extract::State,
    routing::get,
};
use axum_helpers::{
    IdPath, ServiceResponse, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, BusinessRuleResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProduct, Product, ProductQuery, SearchQuery, SortBy};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        search_products,
        get_product,
        create_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, SortBy),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BusinessRuleResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/{id}", get(get_product).delete(delete_product))
        .with_state(shared_service)
}

/// List products
///
/// With `q` the store's literal substring search is used instead of the
/// `search` filter; `sortBy` applies either way.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products found", body = ServiceResponse<Vec<Product>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ProductQuery>,
) -> ServiceResponse<Vec<Product>> {
    match query.q.as_deref() {
        Some(term) => service.search(term, query.sort_by).await,
        None => service.list_products(query.into()).await,
    }
}

/// Search products by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products found", body = ServiceResponse<Vec<Product>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ServiceResponse<Vec<Product>> {
    service.search(&query.q, query.sort_by).await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID, a positive integer")
    ),
    responses(
        (status = 200, description = "Product found", body = ServiceResponse<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ServiceResponse<Product> {
    service.get_by_id(id).await
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ServiceResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ServiceResponse<Product> {
    service.create(input).await
}

/// Delete an unavailable product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID, a positive integer")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ServiceResponse<Product>),
        (status = 400, response = BusinessRuleResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ServiceResponse<Product> {
    service.delete(id).await
}
