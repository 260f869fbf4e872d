use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::CrudResult;
use crate::repository::Repository;
use crate::validation::{RuleSet, Validated, ValidationFailure};

/// Service layer: validated request -> canonical entity -> storage
pub struct EntityService<E: Entity, R: Repository<E>> {
    repository: Arc<R>,
    rules: Arc<RuleSet<E::Request>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: Repository<E>> EntityService<E, R> {
    pub fn new(repository: R, rules: RuleSet<E::Request>) -> Self {
        Self {
            repository: Arc::new(repository),
            rules: Arc::new(rules),
            _entity: PhantomData,
        }
    }

    pub fn rules(&self) -> &RuleSet<E::Request> {
        &self.rules
    }

    #[instrument(skip(self), fields(resource = E::RESOURCE))]
    pub async fn find_all(&self) -> CrudResult<Vec<E>> {
        self.repository.find_all().await
    }

    /// `None` when no entity has this id.
    #[instrument(skip(self), fields(resource = E::RESOURCE))]
    pub async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>> {
        self.repository.find_by_id(id).await
    }

    /// Runs the rule table; `path` is the request context reported on failure.
    pub fn validate(
        &self,
        request: E::Request,
        path: impl Into<String>,
    ) -> Result<Validated<E::Request>, ValidationFailure> {
        self.rules.validate(request, path)
    }

    /// Assigns a fresh id and stores the entity built from `request`.
    #[instrument(skip(self, request), fields(resource = E::RESOURCE))]
    pub async fn save(&self, request: Validated<E::Request>) -> CrudResult<E> {
        let id = Uuid::new_v4().to_string();
        let entity = E::from_request(id, request.into_inner());
        self.repository.save(entity).await
    }

    /// [`validate`](Self::validate) followed by [`save`](Self::save).
    pub async fn create(&self, request: E::Request, path: impl Into<String>) -> CrudResult<E> {
        let validated = self.validate(request, path)?;
        self.save(validated).await
    }
}

impl<E: Entity, R: Repository<E>> Clone for EntityService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            rules: Arc::clone(&self.rules),
            _entity: PhantomData,
        }
    }
}
