//! HTTP handlers for Categories API

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

use crate::models::{Category, CreateCategory};

type SharedState<R> = Arc<CrudState<Category, R>>;

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category, get_category),
    components(
        schemas(Category, CreateCategory, ApiError, ValidationFailure),
        responses(
            BadRequestValidationResponse,
            BadRequestInvalidRequestResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router
pub fn router<R: Repository<Category> + 'static>(
    service: crate::CategoryService<R>,
    options: BoundaryOptions,
) -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", get(get_category))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(CrudState::shared(service, options))
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: Repository<Category>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
) -> Result<Json<Vec<Category>>, Response> {
    handlers::find_all(state, uri).await
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: Repository<Category>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), Response> {
    handlers::create(state, uri, payload).await
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, response = BadRequestInvalidRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: Repository<Category>>(
    state: State<SharedState<R>>,
    uri: OriginalUri,
    id: Path<String>,
) -> Result<Json<Category>, Response> {
    handlers::find_by_id(state, uri, id).await
}
