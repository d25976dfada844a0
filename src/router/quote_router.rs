use axum::{Router, routing::{post, get}};
use crate::handler::quote_handler::{
    create_price_quote_handler,
    estimate_handler,
    list_price_quotes_handler,
    get_price_quote_handler,
};
use std::sync::Arc;
use crate::service::quote_service::PriceQuoteServiceImpl;


pub fn quote_router(service: Arc<PriceQuoteServiceImpl>) -> Router {
    Router::new()
        .route("/api/price-quotes", post(create_price_quote_handler).get(list_price_quotes_handler))
        .route("/api/price-quote", post(create_price_quote_handler))
        .route("/api/price-quotes/{id}", get(get_price_quote_handler))
        .route("/api/estimate", post(estimate_handler))
        .with_state(service)
}
