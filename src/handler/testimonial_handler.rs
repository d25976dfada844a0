use axum::{extract::State, response::IntoResponse, Json};
use crate::service::testimonial_service::{TestimonialServiceImpl, TestimonialService};
use crate::util::error::HandlerError;
use std::sync::Arc;

// Handler: Active testimonials for the landing page
pub async fn list_testimonials_handler(
    State(service): State<Arc<TestimonialServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let testimonials = service.list_active().await?;
    Ok(Json(testimonials))
}
