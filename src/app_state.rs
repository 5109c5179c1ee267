use std::sync::Arc;

use crate::{
    clients::{HttpQuestionClient, HttpQuizClient, QuestionClient, QuizClient},
    config::Config,
    errors::AppResult,
    services::{
        question_service::QuestionService, quiz_service::QuizService,
        quiz_session_service::QuizSessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub session_service: Arc<QuizSessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Validates the config and wires the HTTP clients into the services.
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let question_client: Arc<dyn QuestionClient> = Arc::new(HttpQuestionClient::new(&config)?);
        let quiz_client: Arc<dyn QuizClient> = Arc::new(HttpQuizClient::new(&config)?);

        Ok(Self::with_clients(config, question_client, quiz_client))
    }

    pub fn with_clients(
        config: Config,
        question_client: Arc<dyn QuestionClient>,
        quiz_client: Arc<dyn QuizClient>,
    ) -> Self {
        let question_service = Arc::new(QuestionService::new(question_client.clone()));
        let quiz_service = Arc::new(QuizService::new(
            quiz_client.clone(),
            question_client.clone(),
        ));
        let session_service = Arc::new(QuizSessionService::new(
            question_client,
            quiz_client,
            &config,
        ));

        Self {
            question_service,
            quiz_service,
            session_service,
            config: Arc::new(config),
        }
    }
}
