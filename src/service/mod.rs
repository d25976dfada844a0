pub mod estimator;
pub mod lead_service;
pub mod quote_service;
pub mod testimonial_service;
