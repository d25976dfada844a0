pub mod lead_handler;
pub mod quote_handler;
pub mod testimonial_handler;
