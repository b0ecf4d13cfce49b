use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};

use crate::config::AppConfig;
use crate::utils::AppError;

#[cfg(test)]
pub mod memory;

/// Database used when neither `MONGO_DB` nor the URI names one
const DEFAULT_DATABASE: &str = "test";

/// Storage operations the account handlers need.
///
/// Documents cross this boundary untyped; the service layer owns the
/// conversion to and from the account models.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `document` and returns the store-assigned `_id`.
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, AppError>;

    /// Sets `field` to `value` on the document with `_id == id` and returns
    /// the document as it is after the update, or `None` if no such document.
    async fn set_field(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError>;

    /// First document whose `field` equals `value` exactly.
    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, AppError>;

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.mongo_uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let db_name = config
            .database_name
            .clone()
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        let mongodb = Self { db };

        // Test connection
        mongodb.ping().await?;
        log::info!("📊 Using database: {}", db_name);

        Ok(mongodb)
    }

    /// Non-unique `email` index on each collection; logins look accounts up by email.
    pub async fn ensure_indexes(&self, collections: &[&str]) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        for name in collections {
            let index = IndexModel::builder().keys(doc! { "email": 1 }).build();

            match self.collection::<Document>(name).create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: {}(email)", name),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, AppError> {
        let result = self.collection::<Document>(collection).insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("Inserted document has no ObjectId".to_string()))
    }

    async fn set_field(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        let mut set = Document::new();
        set.insert(field, value);

        let updated = self
            .collection::<Document>(collection)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, AppError> {
        let mut filter = Document::new();
        filter.insert(field, value);

        Ok(self.collection::<Document>(collection).find_one(filter).await?)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let mut cursor = self.collection::<Document>(collection).find(doc! {}).await?;

        let mut documents = Vec::new();
        while let Some(result) = cursor.next().await {
            documents.push(result?);
        }

        Ok(documents)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
