use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use crate::model::testimonial::{NewTestimonial, Testimonial};
use crate::repository::testimonial_repo::TestimonialRepository;
use crate::util::error::{ServiceError, field_errors};

#[async_trait]
pub trait TestimonialService: Send + Sync {
	async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial, ServiceError>;
	async fn list_active(&self) -> Result<Vec<Testimonial>, ServiceError>;
	/// Inserts the default testimonials when the store holds none. Returns how many were added.
	async fn seed_defaults(&self) -> Result<usize, ServiceError>;
}

pub struct TestimonialServiceImpl {
	pub testimonial_repo: Arc<dyn TestimonialRepository>,
}

impl TestimonialServiceImpl {
	pub fn new(testimonial_repo: Arc<dyn TestimonialRepository>) -> Self {
		TestimonialServiceImpl { testimonial_repo }
	}
}

#[async_trait]
impl TestimonialService for TestimonialServiceImpl {
	async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial, ServiceError> {
		testimonial
			.validate()
			.map_err(|e| ServiceError::InvalidRequest(field_errors(&e)))?;
		Ok(self.testimonial_repo.create(testimonial).await?)
	}

	async fn list_active(&self) -> Result<Vec<Testimonial>, ServiceError> {
		Ok(self.testimonial_repo.get_active().await?)
	}

	async fn seed_defaults(&self) -> Result<usize, ServiceError> {
		if !self.testimonial_repo.get_all().await?.is_empty() {
			info!("Testimonials already present, skipping seed");
			return Ok(0);
		}
		let defaults = default_testimonials();
		let count = defaults.len();
		for testimonial in defaults {
			self.create_testimonial(testimonial).await?;
		}
		info!(count, "Seeded default testimonials");
		Ok(count)
	}
}

fn details(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

pub fn default_testimonials() -> Vec<NewTestimonial> {
	vec![
		NewTestimonial {
			name: "דני כהן".to_string(),
			service_type: "הובלת דירה".to_string(),
			location: "תל אביב".to_string(),
			rating: 5.0,
			content: "שירות מעולה! צוות מקצועי ואדיב, הגיעו בזמן והתייחסו לחפצים שלנו בזהירות מירבית. ההובלה הייתה חלקה במיוחד וללא כל תקלות. מומלץ בחום!".to_string(),
			details: details(&[
				"הובלת דירת 3 חדרים",
				"שירותי פירוק והרכבה",
				"אריזת כלי מטבח ופריטים עדינים",
				"הובלה מתל אביב לרמת גן",
			]),
			image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&auto=format&fit=crop".to_string(),
			active: true,
		},
		NewTestimonial {
			name: "מיכל לוי".to_string(),
			service_type: "הובלת משרד".to_string(),
			location: "חיפה".to_string(),
			rating: 5.0,
			content: "העברנו את המשרד שלנו בעזרת אור להובלות ואני חייבת לציין שהיה מדהים! היעילות והמקצועיות של הצוות אפשרה לנו לחזור לעבודה תוך יום אחד בלבד.".to_string(),
			details: details(&[
				"הובלת משרד 120 מ\"ר",
				"פירוק והרכבת ריהוט משרדי",
				"העברת מחשבים וציוד רגיש",
				"הובלה ממרכז העיר לפארק הייטק",
			]),
			image_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&auto=format&fit=crop".to_string(),
			active: true,
		},
		NewTestimonial {
			name: "יוסי אברהם".to_string(),
			service_type: "הובלת פסנתר".to_string(),
			location: "ירושלים".to_string(),
			rating: 4.5,
			content: "הפסנתר שלי הוא פריט יקר ערך ורגיש. הצוות של אור להובלות טיפל בו בצורה מקצועית ובטוחה, כולל פירוק וכיוון מחדש במיקום החדש. התוצאה מושלמת!".to_string(),
			details: details(&[
				"הובלת פסנתר כנף גדול",
				"צוות מיוחד להובלת פסנתרים",
				"מנוף וציוד מיוחד",
				"הורדה מקומה 4 ללא מעלית",
			]),
			image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&auto=format&fit=crop".to_string(),
			active: true,
		},
	]
}
