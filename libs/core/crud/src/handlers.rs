//! Generic HTTP handlers shared by the resource routers.
//!
//! Each resource crate wraps these in thin, documented handlers and mounts
//! them with its own router:
//!
//! ```ignore
//! Router::new()
//!     .route("/", get(list_categories).post(create_category))
//!     .route("/{id}", get(get_category))
//!     .with_state(CrudState::shared(service, options))
//! ```

use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use axum_helpers::{AppError, request_path};
use std::sync::Arc;

use crate::entity::Entity;
use crate::error::CrudError;
use crate::repository::Repository;
use crate::service::EntityService;

/// How failures are rendered at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryOptions {
    /// Stamp `ApiError` bodies with their creation time
    pub include_timestamp: bool,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            include_timestamp: true,
        }
    }
}

/// Router state for one resource.
pub struct CrudState<E: Entity, R: Repository<E>> {
    pub service: EntityService<E, R>,
    pub options: BoundaryOptions,
}

impl<E: Entity, R: Repository<E>> CrudState<E, R> {
    pub fn shared(service: EntityService<E, R>, options: BoundaryOptions) -> Arc<Self> {
        Arc::new(Self { service, options })
    }

    fn fail(&self, path: &str, err: CrudError) -> Response {
        err.into_response_at(path, self.options.include_timestamp)
    }
}

/// `GET /` - every stored entity.
pub async fn find_all<E, R>(
    State(state): State<Arc<CrudState<E, R>>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<E>>, Response>
where
    E: Entity,
    R: Repository<E>,
{
    let path = request_path(uri.path());
    let entities = state
        .service
        .find_all()
        .await
        .map_err(|e| state.fail(&path, e))?;
    Ok(Json(entities))
}

/// `GET /{id}` - one entity; unknown ids are reported as invalid requests.
pub async fn find_by_id<E, R>(
    State(state): State<Arc<CrudState<E, R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<E>, Response>
where
    E: Entity,
    R: Repository<E>,
{
    let path = request_path(uri.path());
    state
        .service
        .find_by_id(&id)
        .await
        .map_err(|e| state.fail(&path, e))?
        .map(Json)
        .ok_or_else(|| state.fail(&path, CrudError::not_found(E::RESOURCE, &id)))
}

/// `POST /` - validates the body and stores a new entity (201).
pub async fn create<E, R>(
    State(state): State<Arc<CrudState<E, R>>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<E::Request>, JsonRejection>,
) -> Result<(StatusCode, Json<E>), Response>
where
    E: Entity,
    R: Repository<E>,
{
    let path = request_path(uri.path());
    let Json(request) = payload.map_err(|e| state.fail(&path, AppError::from(e).into()))?;
    tracing::debug!(resource = E::RESOURCE, ?request, "Creation request received");

    let entity = state
        .service
        .create(request, path.as_str())
        .await
        .map_err(|e| state.fail(&path, e))?;
    Ok((StatusCode::CREATED, Json(entity)))
}
