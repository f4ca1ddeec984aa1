use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, UserNotes},
    services::{
        kobold_client::{KoboldClient, KoboldEndpoint},
        prompt_builder::build_prompt,
        question_validator::parse_questions,
        response_normalizer::normalize,
    },
};

/// Runs the whole notes-to-questions pipeline against one client.
pub async fn generate_questions(
    client: &KoboldClient,
    notes: &UserNotes,
) -> AppResult<Vec<Question>> {
    let prompt = build_prompt(notes);
    let raw = client.complete(&prompt).await?;
    let completion = normalize(&raw);
    parse_questions(&completion)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Point the generator at a new KoboldCPP instance.
    async fn configure(&self, base_url: &str) -> AppResult<KoboldEndpoint>;

    async fn endpoint(&self) -> Option<KoboldEndpoint>;

    async fn generate(&self, notes: &UserNotes) -> AppResult<Vec<Question>>;
}

pub struct GenerationService {
    http: reqwest::Client,
    client: RwLock<Option<KoboldClient>>,
}

impl GenerationService {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            client: RwLock::new(None),
        }
    }

    async fn current_client(&self) -> AppResult<KoboldClient> {
        self.client.read().await.clone().ok_or_else(|| {
            AppError::Configuration("Please set the KoboldCPP API URL first".to_string())
        })
    }
}

#[async_trait]
impl QuestionGenerator for GenerationService {
    async fn configure(&self, base_url: &str) -> AppResult<KoboldEndpoint> {
        let endpoint = KoboldEndpoint::parse(base_url)?;
        let client = KoboldClient::new(self.http.clone(), endpoint.clone());

        *self.client.write().await = Some(client);

        log::info!("Generation endpoint set to {}", endpoint);
        Ok(endpoint)
    }

    async fn endpoint(&self) -> Option<KoboldEndpoint> {
        self.client
            .read()
            .await
            .as_ref()
            .map(|c| c.endpoint().clone())
    }

    async fn generate(&self, notes: &UserNotes) -> AppResult<Vec<Question>> {
        let client = self.current_client().await?;

        log::info!(
            "Generating questions for {} notes ({} chars) via {}",
            notes.subject,
            notes.content.chars().count(),
            client.endpoint()
        );

        match generate_questions(&client, notes).await {
            Ok(questions) => {
                log::info!("Generated {} questions", questions.len());
                Ok(questions)
            }
            Err(e) => {
                log::warn!("Question generation failed [{}]: {}", e.error_code(), e);
                Err(e)
            }
        }
    }
}
