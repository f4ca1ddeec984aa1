use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Subject, UserNotes};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    pub subject: Subject,

    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

impl From<GenerateQuestionsRequest> for UserNotes {
    fn from(request: GenerateQuestionsRequest) -> Self {
        UserNotes::new(request.subject, request.content)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfigureEndpointRequest {
    #[validate(url(message = "Endpoint must be a well-formed URL"))]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    /// Choice id for multiple choice, free text for fill-in-blank.
    #[validate(length(min = 1, max = 1000))]
    pub answer: String,
}

/// Paging query. Out-of-range values are clamped rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0).max(0) as usize
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(20).clamp(1, 100) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_generate_request() {
        let request = GenerateQuestionsRequest {
            subject: Subject::Biology,
            content: "Cells are the basic unit of life.".to_string(),
        };
        assert!(request.validate().is_ok());

        let notes: UserNotes = request.into();
        assert_eq!(notes.subject, Subject::Biology);
    }

    #[test]
    fn test_empty_notes_rejected() {
        let request = GenerateQuestionsRequest {
            subject: Subject::Math,
            content: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_generate_request_rejects_unknown_subject() {
        let parsed = serde_json::from_str::<GenerateQuestionsRequest>(
            r#"{"subject": "history", "content": "Rome"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let request = ConfigureEndpointRequest {
            url: "not a url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_pagination_defaults_and_clamping() {
        let defaults = PaginationParams::default();
        assert_eq!(defaults.offset(), 0);
        assert_eq!(defaults.limit(), 20);

        let oversized = PaginationParams {
            offset: Some(-5),
            limit: Some(1000),
        };
        assert_eq!(oversized.offset(), 0);
        assert_eq!(oversized.limit(), 100);

        let zero = PaginationParams {
            offset: None,
            limit: Some(0),
        };
        assert_eq!(zero.limit(), 1);
    }
}
