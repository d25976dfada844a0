use axum::{extract::{State, Path, rejection::JsonRejection}, response::IntoResponse, Json, http::StatusCode};
use crate::dto::quote_dto::CreatePriceQuoteRequest;
use crate::service::quote_service::{PriceQuoteServiceImpl, PriceQuoteService};
use crate::util::error::HandlerError;
use std::sync::Arc;
use tracing::{info, debug};

// Handler: Submit calculator quote (public)
pub async fn create_price_quote_handler(
    State(service): State<Arc<PriceQuoteServiceImpl>>,
    payload: Result<Json<CreatePriceQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(request) = payload?;
    info!("[create_price_quote_handler] Handler called");
    debug!(?request, "Price quote payload");
    let quote = service.submit_quote(request).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

// Handler: Live estimate for the calculator, nothing stored
pub async fn estimate_handler(
    State(service): State<Arc<PriceQuoteServiceImpl>>,
    payload: Result<Json<CreatePriceQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(request) = payload?;
    let breakdown = service.preview_estimate(request).await?;
    Ok(Json(breakdown))
}

// Handler: List price quotes
pub async fn list_price_quotes_handler(
    State(service): State<Arc<PriceQuoteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let quotes = service.list_quotes().await?;
    Ok(Json(quotes))
}

// Handler: Get price quote
pub async fn get_price_quote_handler(
    State(service): State<Arc<PriceQuoteServiceImpl>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HandlerError> {
    let quote = service.get_quote(id).await?;
    Ok(Json(quote))
}
