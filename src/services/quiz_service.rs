use std::sync::Arc;

use validator::Validate;

use crate::{
    clients::{QuestionClient, QuizClient},
    errors::AppResult,
    models::{
        domain::{question::unique_categories, Quiz, QuizPreview},
        dto::{
            request::{CreateQuizRequest, QuizDto},
            response::ApiResponse,
        },
    },
    services::listing::Listing,
};

pub struct QuizService {
    quiz_client: Arc<dyn QuizClient>,
    question_client: Arc<dyn QuestionClient>,
}

impl QuizService {
    pub fn new(quiz_client: Arc<dyn QuizClient>, question_client: Arc<dyn QuestionClient>) -> Self {
        Self {
            quiz_client,
            question_client,
        }
    }

    /// Validates the form and creates the quiz. Only title, category and
    /// question count are sent; the rest stays on the local record.
    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<ApiResponse<Quiz>> {
        request.validate()?;

        let quiz: Quiz = request.into();
        let message = self.quiz_client.create_quiz(&QuizDto::from(&quiz)).await?;
        log::info!(
            "Created quiz '{}' ({} questions from {})",
            quiz.title,
            quiz.question_count,
            quiz.category
        );

        Ok(ApiResponse {
            data: quiz,
            message,
        })
    }

    /// One preview per category in the question bank, numbered from 1.
    pub async fn catalog(&self) -> AppResult<Vec<QuizPreview>> {
        let questions = self.question_client.get_all_questions().await?;

        let previews = unique_categories(&questions)
            .iter()
            .enumerate()
            .map(|(position, category)| {
                let available = questions.iter().filter(|q| &q.category == category).count();
                QuizPreview::for_category(position, category, available)
            })
            .collect();

        Ok(previews)
    }

    /// Listing view over the catalog. A failed fetch yields an empty listing.
    pub async fn quiz_listing(&self) -> Listing<QuizPreview> {
        match self.catalog().await {
            Ok(previews) => Listing::new(previews),
            Err(e) => {
                log::error!("Failed to load quizzes: {}", e);
                Listing::default()
            }
        }
    }
}
