use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::ComputerScience => "computer_science",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Study notes submitted for one generation call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserNotes {
    pub subject: Subject,
    pub content: String,
}

impl UserNotes {
    pub fn new(subject: Subject, content: impl Into<String>) -> Self {
        Self {
            subject,
            content: content.into(),
        }
    }
}
