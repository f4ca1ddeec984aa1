use crate::models::domain::{Choice, Difficulty, Question, QuestionKind, Subject};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use serde_json::json;

    /// Multiple choice question whose correct choice is `a`.
    pub fn mcq_question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionKind::Mcq {
                choices: vec![
                    choice("a", "Mitochondria", true),
                    choice("b", "Nucleus", false),
                    choice("c", "Ribosome", false),
                    choice("d", "Golgi apparatus", false),
                ],
            },
            question: "Which organelle produces most of the cell's ATP?".to_string(),
            subject: Subject::Biology,
            topic: "cell organelles".to_string(),
            explanation: "Cellular respiration happens in the mitochondria.".to_string(),
            difficulty: Difficulty::Easy,
            likes: 0,
            attempts: 0,
            correct_attempts: 0,
        }
    }

    pub fn fill_in_blank_question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionKind::FillInBlank {
                correct_answer: "mitochondria".to_string(),
            },
            question: "The ____ is known as the powerhouse of the cell.".to_string(),
            subject: Subject::Biology,
            topic: "cell organelles".to_string(),
            explanation: "Mitochondria generate ATP.".to_string(),
            difficulty: Difficulty::Medium,
            likes: 0,
            attempts: 0,
            correct_attempts: 0,
        }
    }

    fn choice(id: &str, text: &str, is_correct: bool) -> Choice {
        Choice {
            id: id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }

    /// A well-formed model completion with three questions.
    pub fn generated_questions_json() -> String {
        json!({
            "questions": [
                {
                    "type": "mcq",
                    "question": "Which organelle produces most of the cell's ATP?",
                    "subject": "biology",
                    "topic": "cell organelles",
                    "choices": [
                        {"id": "a", "text": "Mitochondria", "isCorrect": true},
                        {"id": "b", "text": "Nucleus", "isCorrect": false},
                        {"id": "c", "text": "Ribosome", "isCorrect": false},
                        {"id": "d", "text": "Golgi apparatus", "isCorrect": false}
                    ],
                    "explanation": "Cellular respiration happens in the mitochondria.",
                    "difficulty": "easy"
                },
                {
                    "type": "mcq",
                    "question": "Which molecule carries energy released by respiration?",
                    "subject": "biology",
                    "topic": "metabolism",
                    "choices": [
                        {"id": "a", "text": "DNA", "isCorrect": false},
                        {"id": "b", "text": "ATP", "isCorrect": true}
                    ],
                    "explanation": "ATP stores energy in phosphate bonds.",
                    "difficulty": "medium"
                },
                {
                    "type": "fillInBlank",
                    "question": "The inner membrane folds of the mitochondria are called ____.",
                    "subject": "biology",
                    "topic": "cell organelles",
                    "correctAnswer": "cristae",
                    "explanation": "Cristae increase the membrane surface area.",
                    "difficulty": "hard"
                }
            ]
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_have_distinct_kinds() {
        let mcq = mcq_question("q-1");
        let blank = fill_in_blank_question("q-2");

        assert_eq!(mcq.id, "q-1");
        assert_ne!(mcq.kind, blank.kind);
    }

    #[test]
    fn test_generated_questions_json_has_three_items() {
        let value: serde_json::Value =
            serde_json::from_str(&generated_questions_json()).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 3);
    }
}
