pub mod notes;
pub mod question;
pub use notes::{Subject, UserNotes};
pub use question::{Choice, Difficulty, Question, QuestionKind};
