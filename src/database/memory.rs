use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::utils::AppError;

/// In-process store used by the handler tests
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, like a dropped connection.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> Result<ObjectId, AppError> {
        self.check()?;

        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn set_field(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        self.check()?;

        let mut collections = self.collections.write().await;
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.get_object_id("_id").ok() == Some(id)));

        Ok(target.map(|doc| {
            doc.insert(field, value);
            doc.clone()
        }))
    }

    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, AppError> {
        self.check()?;

        Ok(self.collections.read().await.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.get_str(field).ok() == Some(value))
                .cloned()
        }))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        self.check()?;

        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
