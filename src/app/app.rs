use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, error};

use crate::config::{AppConfig, MongoConfig, StorageBackend};
use crate::repository::lead_repo::{LeadRepository, InMemoryLeadRepository, MongoLeadRepository};
use crate::repository::price_quote_repo::{PriceQuoteRepository, InMemoryPriceQuoteRepository, MongoPriceQuoteRepository};
use crate::repository::testimonial_repo::{TestimonialRepository, InMemoryTestimonialRepository, MongoTestimonialRepository};
use crate::repository::mongo_support::{self, MongoCounters};
use crate::router::lead_router::lead_router;
use crate::router::quote_router::quote_router;
use crate::router::testimonial_router::testimonial_router;
use crate::service::lead_service::LeadServiceImpl;
use crate::service::quote_service::PriceQuoteServiceImpl;
use crate::service::testimonial_service::{TestimonialServiceImpl, TestimonialService};

pub type AppError = Box<dyn std::error::Error + Send + Sync>;

/// The storage adapters the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub leads: Arc<dyn LeadRepository>,
    pub quotes: Arc<dyn PriceQuoteRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Repositories {
            leads: Arc::new(InMemoryLeadRepository::new()),
            quotes: Arc::new(InMemoryPriceQuoteRepository::new()),
            testimonials: Arc::new(InMemoryTestimonialRepository::new()),
        }
    }

    pub async fn mongo(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let db = mongo_support::connect(config).await?;
        let counters = MongoCounters::new(&db, &config.counter_collection);
        Ok(Repositories {
            leads: Arc::new(MongoLeadRepository::new(&db, &config.lead_collection, counters.clone())),
            quotes: Arc::new(MongoPriceQuoteRepository::new(&db, &config.quote_collection, counters.clone())),
            testimonials: Arc::new(MongoTestimonialRepository::new(&db, &config.testimonial_collection, counters)),
        })
    }
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub lead_service: Arc<LeadServiceImpl>,
    pub quote_service: Arc<PriceQuoteServiceImpl>,
    pub testimonial_service: Arc<TestimonialServiceImpl>,
}

impl App {
    pub async fn new(config: AppConfig) -> Result<Self, AppError> {
        let repositories = match config.storage {
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                Repositories::in_memory()
            }
            StorageBackend::Mongo => {
                let mongo_config = MongoConfig::from_env()?;
                info!(database = %mongo_config.database, "Using MongoDB storage");
                Repositories::mongo(&mongo_config).await?
            }
        };
        Self::with_repositories(config, repositories).await
    }

    /// Wires services and routes over the given adapters and seeds testimonials.
    pub async fn with_repositories(config: AppConfig, repositories: Repositories) -> Result<Self, AppError> {
        let lead_service = Arc::new(LeadServiceImpl::new(repositories.leads));
        let quote_service = Arc::new(PriceQuoteServiceImpl::new(repositories.quotes));
        let testimonial_service = Arc::new(TestimonialServiceImpl::new(repositories.testimonials));

        testimonial_service.seed_defaults().await?;

        let mut app = App { config, router: Router::new(), lead_service, quote_service, testimonial_service };
        app.router = app.create_router();
        Ok(app)
    }

    fn create_router(&self) -> Router {
        Router::new()
            .merge(lead_router(self.lead_service.clone()))
            .merge(quote_router(self.quote_service.clone()))
            .merge(testimonial_router(self.testimonial_service.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) -> Result<(), AppError> {
        let host = self.config.host.parse::<std::net::IpAddr>().map_err(|e| {
            error!("Invalid APP_HOST '{}': {}", self.config.host, e);
            e
        })?;
        let addr = SocketAddr::new(host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("🚚 Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
