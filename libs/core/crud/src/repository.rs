use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::entity::Entity;
use crate::error::CrudResult;

/// Storage contract shared by every backend.
///
/// Absence is not an error: `find_by_id` returns `None` for unknown ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All stored entities in the backend's stable order
    async fn find_all(&self) -> CrudResult<Vec<E>>;

    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>>;

    /// Stores the entity, replacing any entity with the same id
    async fn save(&self, entity: E) -> CrudResult<E>;
}

/// Ephemeral backend: an insertion-ordered list behind a read/write lock.
///
/// Clones share the same storage.
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Drops every stored entity.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    #[instrument(skip(self), fields(resource = E::RESOURCE))]
    async fn find_all(&self) -> CrudResult<Vec<E>> {
        Ok(self.entities.read().await.clone())
    }

    #[instrument(skip(self), fields(resource = E::RESOURCE))]
    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>> {
        let entities = self.entities.read().await;
        Ok(entities.iter().find(|entity| entity.id() == id).cloned())
    }

    #[instrument(skip(self, entity), fields(resource = E::RESOURCE, id = %entity.id()))]
    async fn save(&self, entity: E) -> CrudResult<E> {
        let mut entities = self.entities.write().await;
        match entities.iter_mut().find(|stored| stored.id() == entity.id()) {
            Some(stored) => *stored = entity.clone(),
            None => entities.push(entity.clone()),
        }

        tracing::debug!(id = %entity.id(), "{} stored", E::RESOURCE);
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Widget, widget};

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryRepository::<Widget>::new();
        for id in ["c", "a", "b"] {
            repo.save(widget(id, id)).await.unwrap();
        }

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryRepository::<Widget>::new();
        let saved = repo.save(widget("w1", "gear")).await.unwrap();

        assert_eq!(repo.find_by_id("w1").await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_same_id() {
        let repo = InMemoryRepository::<Widget>::new();
        repo.save(widget("w1", "gear")).await.unwrap();
        repo.save(widget("w1", "cog")).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.find_by_id("w1").await.unwrap().unwrap().name, "cog");
    }

    #[tokio::test]
    async fn test_clones_share_storage_and_clear() {
        let repo = InMemoryRepository::<Widget>::new();
        let other = repo.clone();
        repo.save(widget("w1", "gear")).await.unwrap();
        assert_eq!(other.len().await, 1);

        other.clear().await;
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_saves_are_not_lost() {
        let repo = InMemoryRepository::<Widget>::new();
        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(widget(&format!("w{i}"), "gear")).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(repo.len().await, 50);
    }
}
