pub mod feed_service;
pub mod generation_service;
pub mod kobold_client;
pub mod prompt_builder;
pub mod question_validator;
pub mod response_normalizer;
