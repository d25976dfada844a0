use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

use crate::dto::quote_dto::CreatePriceQuoteRequest;
use crate::model::moving::MovingRequest;
use crate::model::quote::{NewPriceQuote, PriceQuote};
use crate::repository::price_quote_repo::PriceQuoteRepository;
use crate::service::estimator::{self, EstimateBreakdown};
use crate::util::error::{FieldError, ServiceError, field_errors, sort_field_errors};

#[async_trait]
pub trait PriceQuoteService: Send + Sync {
	async fn submit_quote(&self, request: CreatePriceQuoteRequest) -> Result<PriceQuote, ServiceError>;
	async fn list_quotes(&self) -> Result<Vec<PriceQuote>, ServiceError>;
	async fn get_quote(&self, id: i64) -> Result<PriceQuote, ServiceError>;
	/// Validates and prices a request without storing anything.
	async fn preview_estimate(&self, request: CreatePriceQuoteRequest) -> Result<EstimateBreakdown, ServiceError>;
}

pub struct PriceQuoteServiceImpl {
	pub quote_repo: Arc<dyn PriceQuoteRepository>,
}

impl PriceQuoteServiceImpl {
	pub fn new(quote_repo: Arc<dyn PriceQuoteRepository>) -> Self {
		PriceQuoteServiceImpl { quote_repo }
	}
}

/// Runs the schema checks and the domain conversion, reporting every field error.
fn validate_request(request: &CreatePriceQuoteRequest) -> Result<MovingRequest, ServiceError> {
	let mut errors: Vec<FieldError> = match request.validate() {
		Ok(()) => Vec::new(),
		Err(e) => field_errors(&e),
	};
	match request.to_moving_request() {
		Ok(moving) if errors.is_empty() => return Ok(moving),
		Ok(_) => {}
		Err(domain_errors) => errors.extend(domain_errors),
	}
	sort_field_errors(&mut errors);
	warn!(?errors, "Rejected price quote request");
	Err(ServiceError::InvalidRequest(errors))
}

fn price(moving: &MovingRequest) -> Result<EstimateBreakdown, ServiceError> {
	estimator::estimate_breakdown(moving).map_err(|e| {
		error!("Estimator rejected a validated request: {}", e);
		ServiceError::InternalError(format!("estimator failure: {}", e))
	})
}

#[async_trait]
impl PriceQuoteService for PriceQuoteServiceImpl {
	async fn submit_quote(&self, request: CreatePriceQuoteRequest) -> Result<PriceQuote, ServiceError> {
		let moving = validate_request(&request)?;
		let breakdown = price(&moving)?;

		let new_quote = NewPriceQuote {
			moving_type: moving.kind.moving_type(),
			size: moving.kind.size_label().map(str::to_string),
			floor: moving.floor,
			distance_km: moving.distance_km,
			additional_services: moving.additional_services.iter().copied().collect(),
			estimated_price: breakdown.total,
		};
		let quote = self.quote_repo.create(new_quote).await?;
		info!(quote_id = quote.id, estimated_price = quote.estimated_price, "Price quote registered");
		Ok(quote)
	}

	async fn list_quotes(&self) -> Result<Vec<PriceQuote>, ServiceError> {
		Ok(self.quote_repo.get_all().await?)
	}

	async fn get_quote(&self, id: i64) -> Result<PriceQuote, ServiceError> {
		Ok(self.quote_repo.get_by_id(id).await?)
	}

	async fn preview_estimate(&self, request: CreatePriceQuoteRequest) -> Result<EstimateBreakdown, ServiceError> {
		let moving = validate_request(&request)?;
		price(&moving)
	}
}
