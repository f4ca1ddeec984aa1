use serde::Serialize;

use crate::models::domain::Question;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuestionsResponse {
    pub questions: Vec<Question>,
    /// Feed length after the new questions were appended.
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub items: Vec<Question>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointResponse {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub question_id: String,
    pub is_correct: bool,
    pub attempts: u32,
    pub correct_attempts: u32,
    /// Share of correct attempts so far, absent before the first attempt.
    pub accuracy: Option<f64>,
    pub explanation: String,
}

impl AnswerOutcome {
    pub fn from_question(question: &Question, is_correct: bool) -> Self {
        AnswerOutcome {
            question_id: question.id.clone(),
            is_correct,
            attempts: question.attempts,
            correct_attempts: question.correct_attempts,
            accuracy: question.accuracy(),
            explanation: question.explanation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::mcq_question;

    #[test]
    fn test_answer_outcome_reflects_counters() {
        let mut question = mcq_question("q-1");
        question.record_attempt(true);

        let outcome = AnswerOutcome::from_question(&question, true);
        let value = serde_json::to_value(&outcome).expect("outcome should serialize");

        assert_eq!(value["questionId"], "q-1");
        assert_eq!(value["isCorrect"], true);
        assert_eq!(value["attempts"], 1);
        assert_eq!(value["correctAttempts"], 1);
        assert_eq!(value["accuracy"], 1.0);

        question.record_attempt(false);
        let outcome = AnswerOutcome::from_question(&question, false);
        assert_eq!(outcome.accuracy, Some(0.5));
    }
}
