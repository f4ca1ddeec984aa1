use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        feed_service::QuestionFeed,
        generation_service::{GenerationService, QuestionGenerator},
        kobold_client::KoboldClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn QuestionGenerator>,
    pub feed: Arc<QuestionFeed>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let http = KoboldClient::build_http_client(config.generation_timeout())?;
        let generator = Arc::new(GenerationService::new(http));

        if let Some(url) = &config.kobold_api_url {
            generator.configure(url).await?;
        }

        Ok(Self::with_generator(config, generator))
    }

    pub fn with_generator(config: Config, generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            generator,
            feed: Arc::new(QuestionFeed::new()),
            config: Arc::new(config),
        }
    }
}
