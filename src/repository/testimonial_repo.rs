use crate::model::testimonial::{NewTestimonial, Testimonial};
use crate::repository::memory_store::MemoryTable;
use crate::repository::mongo_support::MongoCounters;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::info;

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: NewTestimonial) -> RepositoryResult<Testimonial>;
    async fn get_all(&self) -> RepositoryResult<Vec<Testimonial>>;
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Testimonial>;
    async fn get_active(&self) -> RepositoryResult<Vec<Testimonial>>;
}

pub struct InMemoryTestimonialRepository {
    table: MemoryTable<Testimonial>,
}

impl InMemoryTestimonialRepository {
    pub fn new() -> Self {
        InMemoryTestimonialRepository { table: MemoryTable::new("testimonial") }
    }
}

impl Default for InMemoryTestimonialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn create(&self, testimonial: NewTestimonial) -> RepositoryResult<Testimonial> {
        self.table.insert_with(|id| testimonial.into_testimonial(id, Utc::now()))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Testimonial>> {
        self.table.all()
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Testimonial> {
        self.table.get(id)
    }

    async fn get_active(&self) -> RepositoryResult<Vec<Testimonial>> {
        Ok(self.table.all()?.into_iter().filter(|t| t.active).collect())
    }
}

pub struct MongoTestimonialRepository {
    collection: mongodb::Collection<Testimonial>,
    counters: MongoCounters,
}

impl MongoTestimonialRepository {
    pub fn new(db: &mongodb::Database, collection_name: &str, counters: MongoCounters) -> Self {
        MongoTestimonialRepository {
            collection: db.collection::<Testimonial>(collection_name),
            counters,
        }
    }

    async fn find_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<Testimonial>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let mut cursor = self.collection.find(filter, options).await?;
        let mut testimonials = Vec::new();
        while let Some(result) = cursor.next().await {
            testimonials.push(result?);
        }
        Ok(testimonials)
    }
}

#[async_trait]
impl TestimonialRepository for MongoTestimonialRepository {
    async fn create(&self, testimonial: NewTestimonial) -> RepositoryResult<Testimonial> {
        let id = self.counters.next_id("testimonials").await?;
        let created = testimonial.into_testimonial(id, Utc::now());
        self.collection.insert_one(created.clone(), None).await?;
        info!(testimonial_id = id, "Testimonial created");
        Ok(created)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Testimonial>> {
        self.find_sorted(None).await
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Testimonial> {
        self.collection
            .find_one(doc! { "id": id }, None)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("testimonial {} not found", id)))
    }

    async fn get_active(&self) -> RepositoryResult<Vec<Testimonial>> {
        self.find_sorted(Some(doc! { "active": true })).await
    }
}
