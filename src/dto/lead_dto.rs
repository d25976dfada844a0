use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::lead::NewLead;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[serde(default, alias = "fullName")]
    #[validate(length(min = 2, max = 100, message = "name must be 2 to 100 characters"), custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 9, max = 20, message = "phone must be 9 to 20 characters"), custom(function = "not_blank"))]
    pub phone: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default, alias = "movingType")]
    #[validate(length(min = 1, max = 50, message = "a service type must be selected"), custom(function = "not_blank"))]
    pub service_type: String,

    #[serde(alias = "details")]
    #[validate(length(max = 2000, message = "message must be at most 2000 characters"))]
    pub message: Option<String>,

    #[serde(alias = "movingDate")]
    #[validate(custom(function = "calendar_date"))]
    pub preferred_date: Option<String>,

    #[serde(default, alias = "consentToMarketing")]
    pub consent: bool,
}

impl CreateLeadRequest {
    /// Form widgets post empty strings for untouched optional inputs.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.service_type = self.service_type.trim().to_string();
        self.email = non_empty(self.email);
        self.message = non_empty(self.message);
        self.preferred_date = non_empty(self.preferred_date);
        self
    }

    pub fn into_new_lead(self) -> NewLead {
        NewLead {
            name: self.name,
            phone: self.phone,
            email: self.email,
            service_type: self.service_type,
            message: self.message,
            preferred_date: self.preferred_date,
            consent: self.consent,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn calendar_date(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        let mut err = ValidationError::new("date");
        err.message = Some("preferred date must be formatted as YYYY-MM-DD".into());
        return Err(err);
    }
    Ok(())
}
