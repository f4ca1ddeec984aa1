use serde::{Deserialize, Serialize};

use crate::constants::generation::{SamplingParams, SAMPLING_PARAMS};
use crate::models::domain::{Difficulty, QuestionKind, Subject};

/// Body of `POST /api/v1/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct KoboldGenerateRequest<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub params: &'static SamplingParams,
}

impl<'a> KoboldGenerateRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            params: &SAMPLING_PARAMS,
        }
    }
}

/// One question as emitted by the model, before it is stamped with an id
/// and engagement counters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedQuestionDto {
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub question: String,
    pub subject: Subject,
    pub topic: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}
