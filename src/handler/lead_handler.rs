use axum::{extract::{State, Path, rejection::JsonRejection}, response::IntoResponse, Json, http::StatusCode};
use crate::dto::lead_dto::CreateLeadRequest;
use crate::service::lead_service::{LeadServiceImpl, LeadService};
use crate::util::error::HandlerError;
use std::sync::Arc;
use tracing::info;

// Handler: Submit contact form (public)
pub async fn create_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(request) = payload?;
    info!("[create_lead_handler] Handler called");
    let lead = service.submit_lead(request).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// Handler: List leads
pub async fn list_leads_handler(
    State(service): State<Arc<LeadServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let leads = service.list_leads().await?;
    Ok(Json(leads))
}

// Handler: Get lead
pub async fn get_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HandlerError> {
    let lead = service.get_lead(id).await?;
    Ok(Json(lead))
}
