pub mod lead_dto;
pub mod quote_dto;
