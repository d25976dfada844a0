use axum::{body::Body, http::{Request, StatusCode}, Router};
use http_body_util::BodyExt;
use or_moving_backend::app::app::{App, Repositories};
use or_moving_backend::config::AppConfig;
use or_moving_backend::model::quote::{NewPriceQuote, PriceQuote};
use or_moving_backend::repository::price_quote_repo::PriceQuoteRepository;
use or_moving_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

async fn setup_app() -> Router {
    App::with_repositories(AppConfig::default(), Repositories::in_memory())
        .await
        .expect("app")
        .router()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

fn error_fields(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .map(|a| a.iter().map(|f| f["field"].as_str().unwrap_or_default().to_string()).collect())
        .unwrap_or_default()
}

async fn quote_count(app: &Router) -> usize {
    let (_, quotes) = send(app, "GET", "/api/price-quotes", None).await;
    quotes.as_array().unwrap().len()
}

#[tokio::test]
async fn test_medium_apartment_quote_is_priced_and_stored() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "apartment",
        "size": "medium",
        "floor": 2,
        "distanceKm": 20,
        "additionalServices": ["packing"]
    });
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["movingType"], "apartment");
    assert_eq!(body["size"], "medium");
    assert_eq!(body["floor"], 2);
    assert_eq!(body["additionalServices"], json!(["packing"]));
    assert_eq!(body["estimatedPrice"], 3250);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_single_item_quote_via_singular_route() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "singleItem",
        "floor": 0,
        "distanceKm": 10,
        "additionalServices": []
    });
    let (status, body) = send(&app, "POST", "/api/price-quote", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["estimatedPrice"], 600);
    assert_eq!(body["size"], Value::Null);
}

#[tokio::test]
async fn test_client_supplied_price_is_ignored() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "storage",
        "distance": 16,
        "estimatedPrice": "1"
    });
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["estimatedPrice"], 810);
}

#[tokio::test]
async fn test_unknown_moving_type_rejected_without_persisting() {
    let app = setup_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/price-quotes",
        Some(json!({ "movingType": "boat", "distanceKm": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["movingType"]);
    assert_eq!(quote_count(&app).await, 0);
}

#[tokio::test]
async fn test_missing_size_and_bad_ranges_reported_together() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "office",
        "floor": -2,
        "distanceKm": 0,
        "additionalServices": ["piano tuning"]
    });
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["additionalServices", "distanceKm", "floor", "size"]);
    assert_eq!(quote_count(&app).await, 0);
}

#[tokio::test]
async fn test_missing_distance_is_field_error() {
    let app = setup_app().await;
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(json!({ "movingType": "storage" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["distanceKm"]);
}

#[tokio::test]
async fn test_non_numeric_distance_is_field_error() {
    let app = setup_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/price-quotes",
        Some(json!({ "movingType": "storage", "distanceKm": "far" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation");
    assert_eq!(error_fields(&body), vec!["distanceKm"]);
    assert_eq!(quote_count(&app).await, 0);
}

#[tokio::test]
async fn test_missing_moving_type_reported_once() {
    let app = setup_app().await;
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(json!({ "distanceKm": 10 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["movingType"]);
    assert_eq!(body["fields"][0]["message"], "moving type is required");
}

#[tokio::test]
async fn test_null_services_and_whole_float_floor_accepted() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "storage",
        "floor": 2.0,
        "distanceKm": 10,
        "additionalServices": null
    });
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["floor"], 2);
    assert_eq!(body["additionalServices"], json!([]));
    assert_eq!(body["estimatedPrice"], 1000);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = setup_app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/price-quotes")
        .header("content-type", "application/json")
        .body(Body::from("{\"movingType\": \"storage\","))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(quote_count(&app).await, 0);
}

#[tokio::test]
async fn test_estimate_preview_does_not_store() {
    let app = setup_app().await;
    let payload = json!({
        "movingType": "office",
        "size": "veryLarge",
        "floor": 3,
        "distanceKm": 25,
        "additionalServices": ["insurance", "disassembly"]
    });
    let (status, body) = send(&app, "POST", "/api/estimate", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["basePrice"], 6500);
    assert_eq!(body["distanceSurcharge"], 100);
    assert_eq!(body["floorSurcharge"], 350);
    assert_eq!(body["servicesSurcharge"], 500);
    assert_eq!(body["total"], 7450);
    assert_eq!(quote_count(&app).await, 0);
}

#[tokio::test]
async fn test_list_and_get_quotes() {
    let app = setup_app().await;
    for km in [5, 30] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/price-quotes",
            Some(json!({ "movingType": "storage", "distanceKm": km })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, quotes) = send(&app, "GET", "/api/price-quotes", None).await;
    assert_eq!(status, StatusCode::OK);
    let quotes = quotes.as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0]["estimatedPrice"], 800);
    assert_eq!(quotes[1]["estimatedPrice"], 950);

    let (status, quote) = send(&app, "GET", "/api/price-quotes/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["id"], 2);

    let (status, _) = send(&app, "GET", "/api/price-quotes/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

struct OfflinePriceQuoteRepository;

#[async_trait]
impl PriceQuoteRepository for OfflinePriceQuoteRepository {
    async fn create(&self, _quote: NewPriceQuote) -> RepositoryResult<PriceQuote> {
        Err(RepositoryError::connection("database offline"))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<PriceQuote>> {
        Err(RepositoryError::connection("database offline"))
    }

    async fn get_by_id(&self, _id: i64) -> RepositoryResult<PriceQuote> {
        Err(RepositoryError::connection("database offline"))
    }
}

#[tokio::test]
async fn test_quote_storage_failure_is_internal_error() {
    let mut repositories = Repositories::in_memory();
    repositories.quotes = Arc::new(OfflinePriceQuoteRepository);
    let app = App::with_repositories(AppConfig::default(), repositories).await.unwrap().router();

    let payload = json!({ "movingType": "storage", "distanceKm": 10 });
    let (status, body) = send(&app, "POST", "/api/price-quotes", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal");

    // Estimates never touch storage
    let (status, body) = send(&app, "POST", "/api/estimate", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 800);
}
