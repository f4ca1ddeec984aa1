pub mod generation;
pub mod quiz_prompt;
