use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::UserNotes,
        dto::{
            request::{GenerateQuestionsRequest, PaginationParams, SubmitAnswerRequest},
            response::{GeneratedQuestionsResponse, QuestionPage},
        },
    },
};

#[post("/api/questions/generate")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let notes = UserNotes::from(request);
    let questions = state.generator.generate(&notes).await?;
    let total = state.feed.append(questions.clone()).await;

    Ok(HttpResponse::Created().json(GeneratedQuestionsResponse { questions, total }))
}

#[get("/api/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let (offset, limit) = (pagination.offset(), pagination.limit());
    let (items, total) = state.feed.list(offset, limit).await;
    Ok(HttpResponse::Ok().json(QuestionPage {
        items,
        total,
        offset,
        limit,
    }))
}

#[get("/api/questions/{id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.feed.get(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions/{id}/like")]
pub async fn like_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.feed.like(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions/{id}/answer")]
pub async fn answer_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let outcome = state.feed.record_answer(&id, &request.answer).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
