pub mod kobold_dto;
pub mod request;
pub mod response;
