//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
    routing::get,
};
use axum_helpers::errors::{
    ApiError,
    handlers::method_not_allowed,
    responses::{BadRequestInvalidRequestResponse, BadRequestJsonResponse, InternalServerErrorResponse},
};
use entity_crud::{
    BoundaryOptions, CrudState, Repository, ValidationFailure, handlers,
    responses::BadRequestValidationResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::ProductService;
use crate::models::{CreateProduct, Product};

type SharedState<R> = Arc<CrudState<Product, R>>;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(Product, CreateProduct, ApiError, ValidationFailure),
        responses(
            BadRequestValidationResponse,
            BadRequestInvalidRequestResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router
pub fn router<R: Repository<Product> + 'static>(
    service: ProductService<R>,
    options: BoundaryOptions,
) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(CrudState::shared(service, options))
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: Repository<Product>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
) -> Result<Json<Vec<Product>>, Response> {
    handlers::find_all(state, uri).await
}

/// Create a new product
///
/// `categoryId` is stored as given; the category does not have to exist.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: Repository<Product>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), Response> {
    handlers::create(state, uri, payload).await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestInvalidRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: Repository<Product>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
    id: Path<String>,
) -> Result<Json<Product>, Response> {
    handlers::find_by_id(state, uri, id).await
}
