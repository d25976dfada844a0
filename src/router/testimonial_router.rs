use axum::{Router, routing::get};
use crate::handler::testimonial_handler::list_testimonials_handler;
use std::sync::Arc;
use crate::service::testimonial_service::TestimonialServiceImpl;

pub fn testimonial_router(service: Arc<TestimonialServiceImpl>) -> Router {
    Router::new()
        .route("/api/testimonials", get(list_testimonials_handler))
        .with_state(service)
}
