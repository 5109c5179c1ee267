use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::Config,
    errors::AppResult,
    models::{
        domain::QuestionWrapper,
        dto::request::{QuestionResponse, QuizDto},
    },
    services::http_helpers::{endpoint, read_json, read_text, request_failed},
};

/// Calls against the quiz orchestration service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizClient: Send + Sync {
    async fn create_quiz(&self, quiz: &QuizDto) -> AppResult<String>;
    async fn get_quiz_questions(&self, id: i64) -> AppResult<Vec<QuestionWrapper>>;
    async fn submit_quiz(&self, id: i64, responses: &[QuestionResponse]) -> AppResult<i64>;
}

pub struct HttpQuizClient {
    client: Client,
    base_url: Url,
}

impl HttpQuizClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            client: super::http_client()?,
            base_url: config.quiz_base_url()?,
        })
    }
}

#[async_trait]
impl QuizClient for HttpQuizClient {
    async fn create_quiz(&self, quiz: &QuizDto) -> AppResult<String> {
        const CONTEXT: &str = "Failed to create quiz";
        let url = endpoint(&self.base_url, &["create"])?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(quiz)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_text(response, CONTEXT).await
    }

    async fn get_quiz_questions(&self, id: i64) -> AppResult<Vec<QuestionWrapper>> {
        const CONTEXT: &str = "Failed to fetch quiz questions";
        let id = id.to_string();
        let url = endpoint(&self.base_url, &["get", id.as_str()])?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }

    async fn submit_quiz(&self, id: i64, responses: &[QuestionResponse]) -> AppResult<i64> {
        const CONTEXT: &str = "Failed to submit quiz";
        let id = id.to_string();
        let url = endpoint(&self.base_url, &["submit", id.as_str()])?;
        log::debug!("POST {} ({} responses)", url, responses.len());

        let response = self
            .client
            .post(url)
            .json(responses)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }
}
