use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    constants::generation::GENERATED_ID_PREFIX,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuestionKind},
        dto::kobold_dto::GeneratedQuestionDto,
    },
    services::response_normalizer::NormalizedCompletion,
};

/// Parse normalized completion text into fresh questions.
pub fn parse_questions(completion: &NormalizedCompletion) -> AppResult<Vec<Question>> {
    let parsed: serde_json::Value =
        serde_json::from_str(&completion.text).map_err(|source| AppError::Parse {
            context: if completion.appended_brace {
                "generated text is not valid JSON (after appending a closing brace)".to_string()
            } else {
                "generated text is not valid JSON".to_string()
            },
            source,
        })?;

    let items = parsed
        .get("questions")
        .and_then(|q| q.as_array())
        .ok_or_else(|| {
            AppError::Schema(
                "invalid response format: expected a top-level `questions` list".to_string(),
            )
        })?;

    let drafts = items
        .iter()
        .enumerate()
        .map(|(index, item)| -> AppResult<GeneratedQuestionDto> {
            let draft: GeneratedQuestionDto = serde_json::from_value(item.clone())
                .map_err(|e| AppError::Schema(format!("question {}: {}", index, e)))?;
            validate_draft(&draft).map_err(|reason| {
                AppError::Schema(format!("question {}: {}", index, reason))
            })?;
            Ok(draft)
        })
        .collect::<AppResult<Vec<_>>>()?;

    let stamp = Utc::now().timestamp_millis();
    Ok(drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| enrich(draft, stamp, index))
        .collect())
}

fn validate_draft(draft: &GeneratedQuestionDto) -> Result<(), String> {
    if draft.question.trim().is_empty() {
        return Err("question text is empty".to_string());
    }

    match &draft.kind {
        QuestionKind::Mcq { choices } => {
            if choices.len() < 2 {
                return Err(format!(
                    "multiple choice question needs at least 2 choices, got {}",
                    choices.len()
                ));
            }

            let mut seen = HashSet::new();
            for choice in choices {
                if choice.id.trim().is_empty() {
                    return Err("choice id is empty".to_string());
                }
                if !seen.insert(choice.id.as_str()) {
                    return Err(format!("duplicate choice id '{}'", choice.id));
                }
            }

            let correct = choices.iter().filter(|c| c.is_correct).count();
            if correct != 1 {
                return Err(format!(
                    "multiple choice question must have exactly one correct choice, got {}",
                    correct
                ));
            }
        }
        QuestionKind::FillInBlank { correct_answer } => {
            if correct_answer.trim().is_empty() {
                return Err("fill-in-blank question has an empty correctAnswer".to_string());
            }
        }
    }

    Ok(())
}

fn enrich(draft: GeneratedQuestionDto, stamp: i64, index: usize) -> Question {
    Question {
        id: format!(
            "{}-{}-{}-{}",
            GENERATED_ID_PREFIX,
            stamp,
            index,
            Uuid::new_v4().simple()
        ),
        kind: draft.kind,
        question: draft.question,
        subject: draft.subject,
        topic: draft.topic,
        explanation: draft.explanation,
        difficulty: draft.difficulty,
        likes: 0,
        attempts: 0,
        correct_attempts: 0,
    }
}
