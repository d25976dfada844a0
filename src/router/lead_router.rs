use axum::{Router, routing::{post, get}};
use crate::handler::lead_handler::{
    create_lead_handler,
    list_leads_handler,
    get_lead_handler,
};
use std::sync::Arc;
use crate::service::lead_service::LeadServiceImpl;

pub fn lead_router(service: Arc<LeadServiceImpl>) -> Router {
    Router::new()
        .route("/api/leads", post(create_lead_handler).get(list_leads_handler))
        .route("/api/contact", post(create_lead_handler))
        .route("/api/leads/{id}", get(get_lead_handler))
        .with_state(service)
}
