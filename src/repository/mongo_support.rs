use bson::{doc, Document};
use mongodb::options::{ClientOptions, Credential, FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::config::mongo_conf::MongoConfig;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// Opens a client using MongoConfig and returns the configured database.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.uri).await?;
    client_options.app_name = Some("OrMovingBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(Credential::builder()
            .username(username.clone())
            .password(password.clone())
            .build());
    }

    let client = Client::with_options(client_options)?;
    info!(database = %config.database, "MongoDB client created");
    Ok(client.database(&config.database))
}

/// Integer id sequences kept in a `counters` collection, one document per table.
#[derive(Clone)]
pub struct MongoCounters {
    collection: Collection<Document>,
}

impl MongoCounters {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        MongoCounters { collection: db.collection::<Document>(collection_name) }
    }

    pub async fn next_id(&self, sequence: &str) -> RepositoryResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();
        let counter = self
            .collection
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": 1_i64 } }, options)
            .await?
            .ok_or_else(|| RepositoryError::database(format!("counter '{}' was not returned", sequence)))?;
        let id = counter
            .get_i64("seq")
            .map_err(|e| RepositoryError::database(format!("counter '{}' is malformed: {}", sequence, e)))?;
        debug!(sequence, id, "Allocated id");
        Ok(id)
    }
}
