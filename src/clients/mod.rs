pub mod question_client;
pub mod quiz_client;

pub use question_client::{HttpQuestionClient, QuestionClient};
pub use quiz_client::{HttpQuizClient, QuizClient};

#[cfg(test)]
pub use question_client::MockQuestionClient;
#[cfg(test)]
pub use quiz_client::MockQuizClient;

/// Shared HTTP client for both services.
pub(crate) fn http_client() -> crate::errors::AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("quiz-console/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
