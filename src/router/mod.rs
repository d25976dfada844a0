pub mod lead_router;
pub mod quote_router;
pub mod testimonial_router;
