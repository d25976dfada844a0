pub mod moving;
pub mod quote;
pub mod lead;
pub mod testimonial;
