pub mod generator_handler;
pub mod question_handler;

use actix_web::web;

use crate::errors::AppError;

pub use generator_handler::{configure_endpoint, get_endpoint, health_check, health_check_ready};
pub use question_handler::{
    answer_question, generate_questions, get_question, like_question, list_questions,
};

/// Request body cap. Notes may hold 10000 characters of up to four bytes each.
pub const JSON_BODY_LIMIT: usize = 64 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(health_check)
    .service(health_check_ready)
    .service(configure_endpoint)
    .service(get_endpoint)
    .service(generate_questions)
    .service(list_questions)
    .service(get_question)
    .service(like_question)
    .service(answer_question);
}
