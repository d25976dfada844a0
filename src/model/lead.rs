use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub consent: bool,
}

impl NewLead {
    pub fn into_lead(self, id: i64, created_at: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            service_type: self.service_type,
            message: self.message,
            preferred_date: self.preferred_date,
            consent: self.consent,
            created_at,
        }
    }
}
