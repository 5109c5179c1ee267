use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::Config,
    errors::AppResult,
    models::{
        domain::{question::unique_categories, Question, QuestionWrapper},
        dto::request::{CreateQuestionRequest, QuestionResponse},
    },
    services::http_helpers::{endpoint, read_json, read_text, request_failed},
};

/// Calls against the question bank service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionClient: Send + Sync {
    async fn get_all_questions(&self) -> AppResult<Vec<Question>>;
    async fn get_questions_by_category(&self, category: &str) -> AppResult<Vec<Question>>;
    async fn add_question(&self, question: &CreateQuestionRequest) -> AppResult<String>;
    async fn generate_question_ids(&self, category: &str, count: usize) -> AppResult<Vec<i64>>;
    async fn get_questions_by_ids(&self, ids: &[i64]) -> AppResult<Vec<QuestionWrapper>>;
    async fn get_score(&self, responses: &[QuestionResponse]) -> AppResult<i64>;

    /// Distinct categories of the whole bank, in first-seen order.
    async fn list_categories(&self) -> AppResult<Vec<String>> {
        let questions = self.get_all_questions().await?;
        Ok(unique_categories(&questions))
    }
}

pub struct HttpQuestionClient {
    client: Client,
    base_url: Url,
}

impl HttpQuestionClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            client: super::http_client()?,
            base_url: config.question_base_url()?,
        })
    }
}

#[async_trait]
impl QuestionClient for HttpQuestionClient {
    async fn get_all_questions(&self) -> AppResult<Vec<Question>> {
        const CONTEXT: &str = "Failed to fetch questions";
        let url = endpoint(&self.base_url, &["allQuestions"])?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }

    async fn get_questions_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        const CONTEXT: &str = "Failed to fetch questions by category";
        let url = endpoint(&self.base_url, &["category", category])?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }

    async fn add_question(&self, question: &CreateQuestionRequest) -> AppResult<String> {
        const CONTEXT: &str = "Failed to add question";
        let url = endpoint(&self.base_url, &["addQuestion"])?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(question)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_text(response, CONTEXT).await
    }

    async fn generate_question_ids(&self, category: &str, count: usize) -> AppResult<Vec<i64>> {
        const CONTEXT: &str = "Failed to generate question IDs";
        let url = endpoint(&self.base_url, &["generate"])?;
        log::debug!("GET {} (category={}, count={})", url, category, count);

        let count = count.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("categoryname", category), ("numofquestions", count.as_str())])
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }

    async fn get_questions_by_ids(&self, ids: &[i64]) -> AppResult<Vec<QuestionWrapper>> {
        const CONTEXT: &str = "Failed to fetch questions by IDs";
        let url = endpoint(&self.base_url, &["getQuestions"])?;
        log::debug!("POST {} ({} ids)", url, ids.len());

        let response = self
            .client
            .post(url)
            .json(ids)
            .send()
            .await
            .map_err(|e| request_failed(CONTEXT, e))?;
        read_json(response, CONTEXT).await
    }

    async fn get_score(&self, responses: &[QuestionResponse]) -> AppResult<i64> {
        const CONTEXT: &str = "Failed to calculate score";
        let url = endpoint(&self.base_url, &["getscore"])?;
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
