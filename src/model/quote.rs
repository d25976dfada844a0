use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::moving::{AdditionalService, MovingType};

/// A stored calculator submission with its server-computed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub id: i64,
    pub moving_type: MovingType,
    pub size: Option<String>,
    pub floor: u32,
    pub distance_km: f64,
    pub additional_services: Vec<AdditionalService>,
    pub estimated_price: u32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a price quote; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceQuote {
    pub moving_type: MovingType,
    pub size: Option<String>,
    pub floor: u32,
    pub distance_km: f64,
    pub additional_services: Vec<AdditionalService>,
    pub estimated_price: u32,
}

impl NewPriceQuote {
    pub fn into_quote(self, id: i64, created_at: DateTime<Utc>) -> PriceQuote {
        PriceQuote {
            id,
            moving_type: self.moving_type,
            size: self.size,
            floor: self.floor,
            distance_km: self.distance_km,
            additional_services: self.additional_services,
            estimated_price: self.estimated_price,
            created_at,
        }
    }
}
