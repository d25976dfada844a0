use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::lead_dto::CreateLeadRequest;
use crate::model::lead::Lead;
use crate::repository::lead_repo::LeadRepository;
use crate::util::error::{ServiceError, field_errors};

#[async_trait]
pub trait LeadService: Send + Sync {
	async fn submit_lead(&self, request: CreateLeadRequest) -> Result<Lead, ServiceError>;
	async fn list_leads(&self) -> Result<Vec<Lead>, ServiceError>;
	async fn get_lead(&self, id: i64) -> Result<Lead, ServiceError>;
}

pub struct LeadServiceImpl {
	pub lead_repo: Arc<dyn LeadRepository>,
}

impl LeadServiceImpl {
	pub fn new(lead_repo: Arc<dyn LeadRepository>) -> Self {
		LeadServiceImpl { lead_repo }
	}
}

#[async_trait]
impl LeadService for LeadServiceImpl {
	async fn submit_lead(&self, request: CreateLeadRequest) -> Result<Lead, ServiceError> {
		let request = request.normalized();
		if let Err(e) = request.validate() {
			let fields = field_errors(&e);
			warn!(?fields, "Rejected lead submission");
			return Err(ServiceError::InvalidRequest(fields));
		}

		let lead = self.lead_repo.create(request.into_new_lead()).await?;
		info!(lead_id = lead.id, service_type = %lead.service_type, "Lead received");
		Ok(lead)
	}

	async fn list_leads(&self) -> Result<Vec<Lead>, ServiceError> {
		Ok(self.lead_repo.get_all().await?)
	}

	async fn get_lead(&self, id: i64) -> Result<Lead, ServiceError> {
		Ok(self.lead_repo.get_by_id(id).await?)
	}
}
