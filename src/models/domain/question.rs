use serde::{Deserialize, Serialize};

use crate::models::domain::notes::Subject;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub question: String,
    pub subject: Subject,
    pub topic: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub likes: u32,
    pub attempts: u32,
    pub correct_attempts: u32, // never exceeds attempts
}

/// The `type` tag together with the field that only exists for that type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "mcq")]
    Mcq { choices: Vec<Choice> },
    #[serde(rename = "fillInBlank")]
    FillInBlank {
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Question {
    /// Grade a submitted answer. For multiple choice the answer is a choice id,
    /// for fill-in-blank it is free text compared case-insensitively.
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        match &self.kind {
            QuestionKind::Mcq { choices } => choices
                .iter()
                .find(|c| c.id == answer.trim())
                .is_some_and(|c| c.is_correct),
            QuestionKind::FillInBlank { correct_answer } => {
                answer.trim().to_lowercase() == correct_answer.trim().to_lowercase()
            }
        }
    }

    pub fn record_attempt(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct_attempts += 1;
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(f64::from(self.correct_attempts) / f64::from(self.attempts))
        }
    }
}
