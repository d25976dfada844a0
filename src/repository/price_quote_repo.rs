use crate::model::quote::{NewPriceQuote, PriceQuote};
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
pub trait PriceQuoteRepository: Send + Sync {
    async fn create(&self, quote: NewPriceQuote) -> RepositoryResult<PriceQuote>;
    async fn get_all(&self) -> RepositoryResult<Vec<PriceQuote>>;
    async fn get_by_id(&self, id: i64) -> RepositoryResult<PriceQuote>;
}

pub struct InMemoryPriceQuoteRepository {
    table: MemoryTable<PriceQuote>,
}

impl InMemoryPriceQuoteRepository {
    pub fn new() -> Self {
        InMemoryPriceQuoteRepository { table: MemoryTable::new("price quote") }
    }
}

impl Default for InMemoryPriceQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceQuoteRepository for InMemoryPriceQuoteRepository {
    async fn create(&self, quote: NewPriceQuote) -> RepositoryResult<PriceQuote> {
        let created = self.table.insert_with(|id| quote.into_quote(id, Utc::now()))?;
        info!(quote_id = created.id, estimated_price = created.estimated_price, "Price quote stored in memory");
        Ok(created)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<PriceQuote>> {
        self.table.all()
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<PriceQuote> {
        self.table.get(id)
    }
}

pub struct MongoPriceQuoteRepository {
    collection: mongodb::Collection<PriceQuote>,
    counters: MongoCounters,
}

impl MongoPriceQuoteRepository {
    pub fn new(db: &mongodb::Database, collection_name: &str, counters: MongoCounters) -> Self {
        MongoPriceQuoteRepository {
            collection: db.collection::<PriceQuote>(collection_name),
            counters,
        }
    }
}

#[async_trait]
impl PriceQuoteRepository for MongoPriceQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(moving_type = %quote.moving_type))]
    async fn create(&self, quote: NewPriceQuote) -> RepositoryResult<PriceQuote> {
        let id = self.counters.next_id("price_quotes").await?;
        let created = quote.into_quote(id, Utc::now());
        match self.collection.insert_one(created.clone(), None).await {
            Ok(_) => {
                info!(quote_id = id, "Price quote created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create price quote: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    async fn get_all(&self) -> RepositoryResult<Vec<PriceQuote>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let mut cursor = self.collection.find(None, options).await?;
        let mut quotes = Vec::new();
        while let Some(result) = cursor.next().await {
            quotes.push(result?);
        }
        Ok(quotes)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<PriceQuote> {
        self.collection
            .find_one(doc! { "id": id }, None)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("price quote {} not found", id)))
    }
}
