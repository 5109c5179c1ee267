use std::io::Write;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Question, dto::request::CreateQuestionRequest},
    services::{listing::Listing, question_service::QuestionService},
};

/// Prints the question bank, optionally filtered by a search term.
///
/// `delete` ids are only dropped from this listing; the bank keeps them.
pub async fn list_questions<W: Write>(
    service: &QuestionService,
    category: Option<&str>,
    search: Option<&str>,
    delete: &[i64],
    out: &mut W,
) -> AppResult<Listing<Question>> {
    let mut listing = service.question_listing(category).await;

    for id in delete {
        if listing.remove(*id) {
            log::info!("Question {} deleted from the listing only", id);
            writeln!(out, "Removed question {} from this view (not deleted on the server)", id)?;
        } else {
            writeln!(out, "No question {} in this view", id)?;
        }
    }

    if let Some(term) = search {
        listing.set_search_term(term);
    }

    let shown = listing.filtered();
    writeln!(out, "Showing {} of {} questions", shown.len(), listing.len())?;
    for question in &shown {
        writeln!(out)?;
        writeln!(
            out,
            "#{} [{}] {}",
            question.id, question.category, question.question_title
        )?;
        for option in question.options() {
            let marker = if question.is_correct(option) { "x" } else { " " };
            writeln!(out, "  [{}] {}", marker, option)?;
        }
    }

    Ok(listing)
}

pub async fn add_question<W: Write>(
    service: &QuestionService,
    request: CreateQuestionRequest,
    out: &mut W,
) -> AppResult<()> {
    match service.create_question(request).await {
        Ok(response) => {
            writeln!(out, "Question created successfully! ({})", response.message)?;
            Ok(())
        }
        Err(e) => {
            report_failure(&e, "Failed to create question. Please try again.", out)?;
            Err(e)
        }
    }
}

/// Writes the user-facing message for a failed form submission.
pub(crate) fn report_failure<W: Write>(err: &AppError, retry_message: &str, out: &mut W) -> AppResult<()> {
    log::error!("[{}] {}", err.error_code(), err);
    if err.is_user_correctable() {
        if let AppError::ValidationFailed(message) = err {
            writeln!(out, "{}", message)?;
        }
    } else {
        writeln!(out, "{}", retry_message)?;
    }
    Ok(())
}
