use crate::{
    constants::{
        generation::QUESTIONS_PER_REQUEST,
        quiz_prompt::{OUTPUT_FORMAT_INSTRUCTION, QUESTION_RULES},
    },
    models::domain::UserNotes,
};

/// Render the generation prompt for a set of notes.
pub fn build_prompt(notes: &UserNotes) -> String {
    let subject = notes.subject.as_str();

    format!(
        r#"Generate {count} academic STEM questions based on these {subject} notes:
"{content}"

{rules}

{format_instruction}
{{
  "questions": [
    {{
      "type": "mcq",
      "question": "...",
      "subject": "{subject}",
      "topic": "...",
      "choices": [
        {{"id": "a", "text": "...", "isCorrect": true}},
        {{"id": "b", "text": "...", "isCorrect": false}},
        {{"id": "c", "text": "...", "isCorrect": false}},
        {{"id": "d", "text": "...", "isCorrect": false}}
      ],
      "explanation": "...",
      "difficulty": "easy"
    }},
    {{
      "type": "fillInBlank",
      "question": "... ____ ...",
      "subject": "{subject}",
      "topic": "...",
      "correctAnswer": "...",
      "explanation": "...",
      "difficulty": "medium"
    }}
  ]
}}"#,
        count = QUESTIONS_PER_REQUEST,
        subject = subject,
        content = notes.content,
        rules = QUESTION_RULES,
        format_instruction = OUTPUT_FORMAT_INSTRUCTION,
    )
}
