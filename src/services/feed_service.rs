use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Question, dto::response::AnswerOutcome},
};

/// In-memory question feed for the current session.
pub struct QuestionFeed {
    questions: RwLock<Vec<Question>>,
}

impl Default for QuestionFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionFeed {
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(Vec::new()),
        }
    }

    /// Append a generated batch, returning the new feed length.
    pub async fn append(&self, batch: Vec<Question>) -> usize {
        let mut questions = self.questions.write().await;
        questions.extend(batch);
        questions.len()
    }

    pub async fn list(&self, offset: usize, limit: usize) -> (Vec<Question>, usize) {
        let questions = self.questions.read().await;
        let total = questions.len();
        let page = questions.iter().skip(offset).take(limit).cloned().collect();
        (page, total)
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.questions.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> AppResult<Question> {
        self.questions
            .read()
            .await
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn like(&self, id: &str) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| not_found(id))?;

        question.likes += 1;
        Ok(question.clone())
    }

    pub async fn record_answer(&self, id: &str, answer: &str) -> AppResult<AnswerOutcome> {
        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| not_found(id))?;

        let is_correct = question.is_correct_answer(answer);
        question.record_attempt(is_correct);

        log::debug!(
            "Answer for {} graded {} ({}/{})",
            id,
            if is_correct { "correct" } else { "incorrect" },
            question.correct_attempts,
            question.attempts
        );

        Ok(AnswerOutcome::from_question(question, is_correct))
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Question with id '{}' not found", id))
}
