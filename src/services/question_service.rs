use std::sync::Arc;

use validator::Validate;

use crate::{
    clients::QuestionClient,
    errors::AppResult,
    models::{
        domain::Question,
        dto::{request::CreateQuestionRequest, response::ApiResponse},
    },
    services::listing::Listing,
};

pub struct QuestionService {
    client: Arc<dyn QuestionClient>,
}

impl QuestionService {
    pub fn new(client: Arc<dyn QuestionClient>) -> Self {
        Self { client }
    }

    /// Validates the form and posts it. Nothing is sent when validation fails.
    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
    ) -> AppResult<ApiResponse<CreateQuestionRequest>> {
        request.validate()?;

        let message = self.client.add_question(&request).await?;
        log::info!(
            "Created question '{}' in category {}",
            request.question_title,
            request.category
        );

        Ok(ApiResponse {
            data: request,
            message,
        })
    }

    pub async fn list_questions(&self, category: Option<&str>) -> AppResult<Vec<Question>> {
        match category {
            Some(category) => self.client.get_questions_by_category(category).await,
            None => self.client.get_all_questions().await,
        }
    }

    /// Listing view over the bank. A failed fetch yields an empty listing.
    pub async fn question_listing(&self, category: Option<&str>) -> Listing<Question> {
        let mut listing = Listing::default();
        self.reload(&mut listing, category).await;
        listing
    }

    pub async fn reload(&self, listing: &mut Listing<Question>, category: Option<&str>) {
        match self.list_questions(category).await {
            Ok(questions) => listing.reload(questions),
            Err(e) => {
                log::error!("Failed to load questions: {}", e);
                listing.reload(Vec::new());
            }
        }
    }
}
