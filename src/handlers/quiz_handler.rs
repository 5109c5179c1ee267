use std::io::Write;

use crate::{
    errors::AppResult,
    handlers::question_handler::report_failure,
    models::{domain::QuizPreview, dto::request::CreateQuizRequest},
    services::{listing::Listing, quiz_service::QuizService},
};

pub async fn list_quizzes<W: Write>(
    service: &QuizService,
    search: Option<&str>,
    out: &mut W,
) -> AppResult<Listing<QuizPreview>> {
    let mut listing = service.quiz_listing().await;
    if let Some(term) = search {
        listing.set_search_term(term);
    }

    let shown = listing.filtered();
    if shown.is_empty() {
        writeln!(out, "No quizzes available")?;
    }

    for preview in &shown {
        writeln!(
            out,
            "{:>3}. {} [{}] {} - {} questions, {} min",
            preview.id,
            preview.title,
            preview.category,
            preview.difficulty,
            preview.question_count,
            preview.time_limit_minutes
        )?;
        writeln!(out, "     {}", preview.description)?;
    }
    Ok(listing)
}

pub async fn create_quiz<W: Write>(
    service: &QuizService,
    request: CreateQuizRequest,
    out: &mut W,
) -> AppResult<()> {
    match service.create_quiz(request).await {
        Ok(response) => {
            writeln!(
                out,
                "Quiz created successfully! ({}) '{}' is saved as {}",
                response.message, response.data.title, response.data.status
            )?;
            Ok(())
        }
        Err(e) => {
            report_failure(&e, "Failed to create quiz. Please try again.", out)?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockQuestionClient, MockQuizClient};
    use crate::test_utils::fixtures::question;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_quizzes_renders_catalog() {
        let mut question_client = MockQuestionClient::new();
        question_client.expect_get_all_questions().returning(|| {
            Ok(vec![
                question(1, "a", "Database"),
                question(2, "b", "General"),
            ])
        });
        let service = QuizService::new(Arc::new(MockQuizClient::new()), Arc::new(question_client));
        let mut out = Vec::new();

        list_quizzes(&service, Some("data"), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1. Database Quiz [Database] Beginner - 1 questions, 15 min"));
        assert!(!text.contains("General Quiz"));
    }

    #[tokio::test]
    async fn create_quiz_confirms_status() {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_create_quiz()
            .returning(|_| Ok("Success".to_string()));
        let service = QuizService::new(Arc::new(quiz_client), Arc::new(MockQuestionClient::new()));
        let mut out = Vec::new();

        let request = CreateQuizRequest {
            title: "Joins".to_string(),
            category: "Database".to_string(),
            ..CreateQuizRequest::default()
        };
        create_quiz(&service, request, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'Joins' is saved as draft"));
    }
}
