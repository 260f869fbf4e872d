//! MongoDB implementation of Repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc},
};
use std::marker::PhantomData;
use tracing::instrument;

use crate::entity::Entity;
use crate::error::CrudResult;
use crate::repository::Repository;

/// Durable backend: one collection per entity type, `_id` equal to the entity id.
pub struct MongoRepository<E> {
    collection: Collection<Document>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoRepository<E> {
    /// Uses the entity's default collection.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoRepository::<Category>::new(&client.database("catalog"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, E::COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Document>(collection_name),
            _entity: PhantomData,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// Removes every document of the collection; returns how many were deleted.
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    pub async fn delete_all(&self) -> CrudResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    fn to_document(entity: &E) -> CrudResult<Document> {
        let mut document = bson::to_document(entity)?;
        document.remove("id");
        document.insert("_id", entity.id());
        Ok(document)
    }

    fn from_document(mut document: Document) -> CrudResult<E> {
        if let Some(id) = document.remove("_id") {
            document.insert("id", id);
        }
        Ok(bson::from_document(document)?)
    }
}

impl<E> Clone for MongoRepository<E> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MongoRepository<E> {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn find_all(&self) -> CrudResult<Vec<E>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents.into_iter().map(Self::from_document).collect()
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(Self::from_document)
            .transpose()
    }

    #[instrument(skip(self, entity), fields(collection = %self.collection.name(), id = %entity.id()))]
    async fn save(&self, entity: E) -> CrudResult<E> {
        let document = Self::to_document(&entity)?;

        self.collection
            .replace_one(doc! { "_id": entity.id() }, document)
            .upsert(true)
            .await?;

        tracing::info!(id = %entity.id(), "{} saved successfully", E::RESOURCE);
        Ok(entity)
    }
}
