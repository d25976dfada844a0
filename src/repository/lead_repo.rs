use crate::model::lead::{Lead, NewLead};
use crate::repository::memory_store::MemoryTable;
use crate::repository::mongo_support::MongoCounters;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{info, error};

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create(&self, lead: NewLead) -> RepositoryResult<Lead>;
    async fn get_all(&self) -> RepositoryResult<Vec<Lead>>;
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Lead>;
}

pub struct InMemoryLeadRepository {
    table: MemoryTable<Lead>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        InMemoryLeadRepository { table: MemoryTable::new("lead") }
    }
}

impl Default for InMemoryLeadRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn create(&self, lead: NewLead) -> RepositoryResult<Lead> {
        let created = self.table.insert_with(|id| lead.into_lead(id, Utc::now()))?;
        info!(lead_id = created.id, "Lead stored in memory");
        Ok(created)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Lead>> {
        self.table.all()
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Lead> {
        self.table.get(id)
    }
}

pub struct MongoLeadRepository {
    collection: mongodb::Collection<Lead>,
    counters: MongoCounters,
}

impl MongoLeadRepository {
    pub fn new(db: &mongodb::Database, collection_name: &str, counters: MongoCounters) -> Self {
        MongoLeadRepository {
            collection: db.collection::<Lead>(collection_name),
            counters,
        }
    }
}

#[async_trait]
impl LeadRepository for MongoLeadRepository {
    #[tracing::instrument(skip(self, lead), fields(service_type = %lead.service_type))]
    async fn create(&self, lead: NewLead) -> RepositoryResult<Lead> {
        let id = self.counters.next_id("leads").await?;
        let created = lead.into_lead(id, Utc::now());
        match self.collection.insert_one(created.clone(), None).await {
            Ok(_) => {
                info!(lead_id = id, "Lead created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create lead: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Lead>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let mut cursor = self.collection.find(None, options).await?;
        let mut leads = Vec::new();
        while let Some(result) = cursor.next().await {
            leads.push(result?);
        }
        Ok(leads)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Lead> {
        self.collection
            .find_one(doc! { "id": id }, None)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("lead {} not found", id)))
    }
}
