pub mod repository_error;
pub mod memory_store;
pub mod mongo_support;
pub mod lead_repo;
pub mod price_quote_repo;
pub mod testimonial_repo;
