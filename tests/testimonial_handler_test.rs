use axum::{body::Body, http::{Request, StatusCode}};
use http_body_util::BodyExt;
use or_moving_backend::app::app::{App, Repositories};
use or_moving_backend::config::AppConfig;
use or_moving_backend::service::testimonial_service::{TestimonialService, default_testimonials};
use serde_json::Value;
use tower::ServiceExt; // for .oneshot()

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_seeded_testimonials_listed() {
    let app = App::with_repositories(AppConfig::default(), Repositories::in_memory()).await.unwrap();
    let (status, body) = get_json(&app.router(), "/api/testimonials").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[2]["rating"], 4.5);
    assert!(list.iter().all(|t| t["active"] == true));
    assert!(list[0]["details"].as_array().unwrap().len() > 1);
}

#[tokio::test]
async fn test_inactive_testimonials_not_listed() {
    let app = App::with_repositories(AppConfig::default(), Repositories::in_memory()).await.unwrap();
    let mut retired = default_testimonials().remove(1);
    retired.active = false;
    app.testimonial_service.create_testimonial(retired).await.unwrap();

    let (_, body) = get_json(&app.router(), "/api/testimonials").await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_health() {
    let app = App::with_repositories(AppConfig::default(), Repositories::in_memory()).await.unwrap();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
