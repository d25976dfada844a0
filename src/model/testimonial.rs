use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub service_type: String,
    pub location: String,
    pub rating: f32,
    pub content: String,
    pub details: Vec<String>,
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub service_type: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(custom(function = "validate_rating"))]
    pub rating: f32,
    #[validate(length(min = 1))]
    pub content: String,
    pub details: Vec<String>,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub active: bool,
}

impl NewTestimonial {
    pub fn into_testimonial(self, id: i64, created_at: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            service_type: self.service_type,
            location: self.location,
            rating: self.rating,
            content: self.content,
            details: self.details,
            image_url: self.image_url,
            active: self.active,
            created_at,
        }
    }
}

/// Ratings run from 0 to 5 in half-star steps.
fn validate_rating(rating: f32) -> Result<(), ValidationError> {
    let doubled = rating * 2.0;
    if !(0.0..=5.0).contains(&rating) || doubled.fract() != 0.0 {
        let mut err = ValidationError::new("rating");
        err.message = Some("rating must be between 0 and 5 in steps of 0.5".into());
        return Err(err);
    }
    Ok(())
}
