use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::{
    clients::{QuestionClient, QuizClient},
    config::Config,
    errors::AppResult,
    models::domain::{QuestionSource, QuestionWrapper, QuizSession, SessionStatus, Tick},
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Result of looking up the questions for a quiz id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizResolution {
    /// The quiz service knows this quiz.
    Direct(Vec<QuestionWrapper>),
    /// Sampled from the category at position `id - 1` (or the first one).
    Derived {
        category: String,
        questions: Vec<QuestionWrapper>,
    },
    /// The bank has no categories to fall back on.
    Unresolvable,
}

pub struct QuizSessionService {
    question_client: Arc<dyn QuestionClient>,
    quiz_client: Arc<dyn QuizClient>,
    time_limit: Duration,
    sample_size: usize,
}

impl QuizSessionService {
    pub fn new(
        question_client: Arc<dyn QuestionClient>,
        quiz_client: Arc<dyn QuizClient>,
        config: &Config,
    ) -> Self {
        Self {
            question_client,
            quiz_client,
            time_limit: config.session_time_limit(),
            sample_size: config.generated_question_count,
        }
    }

    /// Tries the stored quiz first, then falls back to a category sample.
    pub async fn resolve_questions(&self, quiz_id: i64) -> AppResult<QuizResolution> {
        match self.quiz_client.get_quiz_questions(quiz_id).await {
            Ok(questions) => return Ok(QuizResolution::Direct(questions)),
            Err(e) => log::warn!(
                "Quiz {} not available directly ({}), deriving from categories",
                quiz_id,
                e
            ),
        }

        let categories = self.question_client.list_categories().await?;
        let Some(category) = pick_category(&categories, quiz_id) else {
            return Ok(QuizResolution::Unresolvable);
        };

        let ids = self
            .question_client
            .generate_question_ids(category, self.sample_size)
            .await?;
        let questions = self.question_client.get_questions_by_ids(&ids).await?;

        Ok(QuizResolution::Derived {
            category: category.clone(),
            questions,
        })
    }

    /// Loads a session. Any failure to resolve questions ends in `NotFound`.
    pub async fn load(&self, quiz_id: i64) -> QuizSession {
        let mut session = QuizSession::loading(quiz_id);

        match self.resolve_questions(quiz_id).await {
            Ok(QuizResolution::Direct(questions)) => {
                log::info!("Loaded quiz {} with {} questions", quiz_id, questions.len());
                session.begin(
                    format!("Quiz {}", quiz_id),
                    QuestionSource::Direct,
                    questions,
                    self.time_limit,
                );
            }
            Ok(QuizResolution::Derived {
                category,
                questions,
            }) => {
                log::info!(
                    "Derived quiz {} from category {} with {} questions",
                    quiz_id,
                    category,
                    questions.len()
                );
                session.begin(
                    format!("{} Quiz", category),
                    QuestionSource::Derived { category },
                    questions,
                    self.time_limit,
                );
            }
            Ok(QuizResolution::Unresolvable) => {
                log::warn!("No categories available for quiz {}", quiz_id);
                session.mark_not_found();
            }
            Err(e) => {
                log::error!("Failed to load quiz {}: {}", quiz_id, e);
                session.mark_not_found();
            }
        }

        session
    }

    /// Sends the answers for scoring. Only an in-progress session is
    /// submitted, so a second call is a no-op.
    pub async fn submit(&self, session: &mut QuizSession) {
        if session.status() != SessionStatus::InProgress {
            return;
        }

        let responses = session.responses();
        let result = match session.source() {
            QuestionSource::Direct => {
                self.quiz_client
                    .submit_quiz(session.quiz_id(), &responses)
                    .await
            }
            QuestionSource::Derived { .. } => self.question_client.get_score(&responses).await,
        };

        match result {
            Ok(score) => {
                log::info!(
                    "Quiz {} scored {}/{} ({} answered)",
                    session.quiz_id(),
                    score,
                    session.total_questions(),
                    responses.len()
                );
                session.complete(score);
            }
            Err(e) => {
                log::error!("Failed to submit quiz {}: {}", session.quiz_id(), e);
                session.fail_submission();
            }
        }
    }

    /// Runs one countdown tick and submits when time runs out.
    pub async fn tick(&self, session: &mut QuizSession) -> Tick {
        let tick = session.tick();
        if tick == Tick::Expired {
            log::info!("Time is up for quiz {}", session.quiz_id());
            self.submit(session).await;
        }
        tick
    }
}

/// One-second countdown timer whose first tick fires after a full period.
pub fn countdown_interval() -> Interval {
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

fn pick_category(categories: &[String], quiz_id: i64) -> Option<&String> {
    quiz_id
        .checked_sub(1)
        .and_then(|position| usize::try_from(position).ok())
        .and_then(|position| categories.get(position))
        .or_else(|| categories.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockQuestionClient, MockQuizClient};
    use crate::errors::AppError;
    use crate::test_utils::fixtures::wrappers;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn service(question_client: MockQuestionClient, quiz_client: MockQuizClient) -> QuizSessionService {
        QuizSessionService::new(
            Arc::new(question_client),
            Arc::new(quiz_client),
            &Config::test_config(),
        )
    }

    fn failing_quiz_client() -> MockQuizClient {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_get_quiz_questions()
            .returning(|_| Err(AppError::RequestFailed("HTTP 404".into())));
        quiz_client
    }

    #[test]
    fn pick_category_by_position_or_first() {
        let names = categories(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(pick_category(&names, 5).unwrap(), "E");
        assert_eq!(pick_category(&names, 1).unwrap(), "A");
        assert_eq!(pick_category(&names, 9).unwrap(), "A");
        assert_eq!(pick_category(&names, 0).unwrap(), "A");
        assert_eq!(pick_category(&names, -3).unwrap(), "A");
        assert!(pick_category(&[], 1).is_none());
    }

    #[tokio::test]
    async fn direct_resolution_skips_fallback() {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_get_quiz_questions()
            .withf(|id| *id == 3)
            .returning(|_| Ok(wrappers(4)));
        let mut question_client = MockQuestionClient::new();
        question_client.expect_list_categories().times(0);

        let resolution = service(question_client, quiz_client)
            .resolve_questions(3)
            .await
            .unwrap();

        assert_eq!(resolution, QuizResolution::Direct(wrappers(4)));
    }

    #[tokio::test]
    async fn fallback_picks_category_at_id_minus_one() {
        let mut question_client = MockQuestionClient::new();
        question_client
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(categories(&["A", "B", "C", "D", "E"])));
        question_client
            .expect_generate_question_ids()
            .withf(|category, count| category == "E" && *count == 10)
            .times(1)
            .returning(|_, _| Ok(vec![1, 2, 3]));
        question_client
            .expect_get_questions_by_ids()
            .withf(|ids| ids.to_vec() == vec![1, 2, 3])
            .returning(|_| Ok(wrappers(3)));

        let resolution = service(question_client, failing_quiz_client())
            .resolve_questions(5)
            .await
            .unwrap();

        assert_eq!(
            resolution,
            QuizResolution::Derived {
                category: "E".to_string(),
                questions: wrappers(3),
            }
        );
    }

    #[tokio::test]
    async fn fallback_uses_first_category_when_position_missing() {
        let mut question_client = MockQuestionClient::new();
        question_client
            .expect_list_categories()
            .returning(|| Ok(categories(&["Database", "General"])));
        question_client
            .expect_generate_question_ids()
            .withf(|category, _| category == "Database")
            .returning(|_, _| Ok(vec![7]));
        question_client
            .expect_get_questions_by_ids()
            .returning(|_| Ok(wrappers(1)));

        let session = service(question_client, failing_quiz_client()).load(5).await;

        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.title(), "Database Quiz");
        assert_eq!(
            session.source(),
            &QuestionSource::Derived {
                category: "Database".to_string()
            }
        );
        assert_eq!(session.remaining_seconds(), 900);
    }

    #[tokio::test]
    async fn no_categories_means_not_found() {
        let mut question_client = MockQuestionClient::new();
        question_client
            .expect_list_categories()
            .returning(|| Ok(Vec::new()));
        question_client.expect_generate_question_ids().times(0);

        let service = service(question_client, failing_quiz_client());
        assert_eq!(
            service.resolve_questions(5).await.unwrap(),
            QuizResolution::Unresolvable
        );

        let session = service.load(5).await;
        assert_eq!(session.status(), SessionStatus::NotFound);
    }

    #[tokio::test]
    async fn fallback_request_failure_means_not_found() {
        let mut question_client = MockQuestionClient::new();
        question_client
            .expect_list_categories()
            .returning(|| Err(AppError::RequestFailed("down".into())));

        let session = service(question_client, failing_quiz_client()).load(2).await;
        assert_eq!(session.status(), SessionStatus::NotFound);
    }

    #[tokio::test]
    async fn direct_session_submits_to_quiz_service() {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_get_quiz_questions()
            .returning(|_| Ok(wrappers(2)));
        quiz_client
            .expect_submit_quiz()
            .withf(|id, responses| *id == 1 && responses.len() == 1)
            .times(1)
            .returning(|_, _| Ok(1));
        let mut question_client = MockQuestionClient::new();
        question_client.expect_get_score().times(0);

        let service = service(question_client, quiz_client);
        let mut session = service.load(1).await;
        session.record_answer("Option A1");
        service.submit(&mut session).await;
        service.submit(&mut session).await;

        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.score(), Some(1));
        assert_eq!(session.percentage(), 50);
    }

    #[tokio::test]
    async fn derived_session_submits_to_question_service() {
        let mut question_client = MockQuestionClient::new();
        question_client
            .expect_list_categories()
            .returning(|| Ok(categories(&["General"])));
        question_client
            .expect_generate_question_ids()
            .returning(|_, _| Ok(vec![1, 2]));
        question_client
            .expect_get_questions_by_ids()
            .returning(|_| Ok(wrappers(2)));
        question_client
            .expect_get_score()
            .times(1)
            .returning(|_| Ok(2));

        let service = service(question_client, failing_quiz_client());
        let mut session = service.load(1).await;
        service.submit(&mut session).await;

        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.percentage(), 100);
    }

    #[tokio::test]
    async fn failed_submission_is_a_distinct_terminal_state() {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_get_quiz_questions()
            .returning(|_| Ok(wrappers(2)));
        quiz_client
            .expect_submit_quiz()
            .times(1)
            .returning(|_, _| Err(AppError::RequestFailed("HTTP 500".into())));

        let service = service(MockQuestionClient::new(), quiz_client);
        let mut session = service.load(1).await;
        service.submit(&mut session).await;

        assert_eq!(session.status(), SessionStatus::SubmissionFailed);
        assert_eq!(session.percentage(), 0);
    }

    #[tokio::test]
    async fn countdown_submits_exactly_once_after_limit() {
        let mut quiz_client = MockQuizClient::new();
        quiz_client
            .expect_get_quiz_questions()
            .returning(|_| Ok(wrappers(3)));
        quiz_client
            .expect_submit_quiz()
            .times(1)
            .returning(|_, _| Ok(0));

        let service = service(MockQuestionClient::new(), quiz_client);
        let mut session = service.load(1).await;
        let limit = session.remaining_seconds();

        for _ in 0..limit - 1 {
            assert_eq!(service.tick(&mut session).await, Tick::Running);
        }
        assert_eq!(service.tick(&mut session).await, Tick::Expired);
        assert_eq!(service.tick(&mut session).await, Tick::Idle);
        assert_eq!(session.status(), SessionStatus::Completed);
    }
}
