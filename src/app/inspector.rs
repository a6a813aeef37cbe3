use crate::app::classifier;
use crate::app::config::{AppConfig, MENU_ITEMS_COLLECTION};
use crate::app::error::AuditError;
use crate::app::models::{ClassificationResult, MenuItem};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::{debug, info};

/// A read-only source of menu items that holds a connection until closed.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Load every item in the collection, in collection order.
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, AuditError>;

    /// Release the underlying connection.
    async fn close(&self);
}

// It handles all database interaction.
pub struct MongoStore {
    client: Client,
    collection: Collection<MenuItem>,
}

impl MongoStore {
    /// Open a client and ping the server so connection and auth problems
    /// surface here rather than halfway through the fetch.
    pub async fn connect(config: &AppConfig) -> Result<Self, AuditError> {
        let uri = config.mongodb_uri.as_deref().ok_or(AuditError::MissingUri)?;

        let client = Client::with_uri_str(uri)
            .await
            .map_err(AuditError::Connection)?;
        let db = client.database(&config.db_name);

        if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(AuditError::Connection(e));
        }

        info!(db = %config.db_name, "connected to MongoDB");

        Ok(Self {
            collection: db.collection(MENU_ITEMS_COLLECTION),
            client,
        })
    }
}

#[async_trait]
impl MenuStore for MongoStore {
    async fn fetch_menu_items(&self) -> Result<Vec<MenuItem>, AuditError> {
        let query_error = |source: mongodb::error::Error| AuditError::Query {
            collection: self.collection.name().to_string(),
            source,
        };

        let cursor = self.collection.find(doc! {}).await.map_err(query_error)?;
        let items: Vec<MenuItem> = cursor.try_collect().await.map_err(query_error)?;

        debug!(count = items.len(), collection = self.collection.name(), "fetched menu items");
        Ok(items)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        debug!("MongoDB client shut down");
    }
}

pub struct Inspector<'a> {
    store: &'a dyn MenuStore,
}

impl<'a> Inspector<'a> {

    pub fn new(store: &'a dyn MenuStore) -> Self {
        Self { store }
    }

    pub async fn scan(&self) -> Result<ClassificationResult, AuditError> {
        let items = self.store.fetch_menu_items().await?;
        Ok(classifier::tally(&items))
    }
}

/// Scan the store and close it afterwards, whether or not the scan worked.
pub async fn audit_collection<S: MenuStore>(store: S) -> Result<ClassificationResult, AuditError> {
    let result = Inspector::new(&store).scan().await;
    store.close().await;
    result
}
