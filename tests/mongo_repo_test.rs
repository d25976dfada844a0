use or_moving_backend::config::mongo_conf::MongoConfig;
use or_moving_backend::model::lead::NewLead;
use or_moving_backend::model::moving::{AdditionalService, MovingType};
use or_moving_backend::model::quote::NewPriceQuote;
use or_moving_backend::app::app::Repositories;
use or_moving_backend::repository::lead_repo::LeadRepository;
use or_moving_backend::repository::price_quote_repo::PriceQuoteRepository;

async fn setup_repositories() -> Repositories {
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env().unwrap_or_else(|_| MongoConfig::from_test_env());
    Repositories::mongo(&config).await.expect("Failed to connect to MongoDB")
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGO_URI / MONGO_DATABASE)"]
async fn test_lead_repository_workflow() {
    let repos = setup_repositories().await;

    let lead = NewLead {
        name: "Dana Levi".to_string(),
        phone: "0501234567".to_string(),
        email: Some("dana@example.com".to_string()),
        service_type: "apartment".to_string(),
        message: None,
        preferred_date: Some("2026-11-20".to_string()),
        consent: true,
    };

    let first = repos.leads.create(lead.clone()).await.expect("Failed to insert lead");
    let second = repos.leads.create(lead).await.expect("Failed to insert lead");
    assert!(second.id > first.id);

    let fetched = repos.leads.get_by_id(first.id).await.expect("Failed to get lead by id");
    assert_eq!(fetched.name, "Dana Levi");

    let all = repos.leads.get_all().await.expect("Failed to list leads");
    assert!(all.len() >= 2);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGO_URI / MONGO_DATABASE)"]
async fn test_price_quote_repository_workflow() {
    let repos = setup_repositories().await;

    let quote = NewPriceQuote {
        moving_type: MovingType::Apartment,
        size: Some("medium".to_string()),
        floor: 2,
        distance_km: 20.0,
        additional_services: vec![AdditionalService::Packing],
        estimated_price: 3250,
    };
    let created = repos.quotes.create(quote).await.expect("Failed to insert quote");
    let fetched = repos.quotes.get_by_id(created.id).await.expect("Failed to get quote");
    assert_eq!(fetched.estimated_price, 3250);
    assert_eq!(fetched.additional_services, vec![AdditionalService::Packing]);

    assert!(repos.quotes.get_by_id(-1).await.is_err());
}
