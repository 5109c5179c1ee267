use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::domain::QuestionWrapper;
use crate::models::dto::request::QuestionResponse;

/// Where a session's questions came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    /// Stored quiz served by the quiz service.
    Direct,
    /// Sample generated from a question bank category.
    Derived { category: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    InProgress,
    Completed,
    SubmissionFailed,
    NotFound,
}

/// Outcome of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running,
    Expired,
    Idle,
}

/// A single client-local attempt at a quiz. Never persisted.
#[derive(Clone, Debug)]
pub struct QuizSession {
    quiz_id: i64,
    title: String,
    source: QuestionSource,
    questions: Vec<QuestionWrapper>,
    current_index: usize,
    answers: HashMap<i64, String>,
    remaining_seconds: u64,
    status: SessionStatus,
    score: Option<i64>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn loading(quiz_id: i64) -> Self {
        QuizSession {
            quiz_id,
            title: format!("Quiz {}", quiz_id),
            source: QuestionSource::Direct,
            questions: Vec::new(),
            current_index: 0,
            answers: HashMap::new(),
            remaining_seconds: 0,
            status: SessionStatus::Loading,
            score: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Moves a loading session into progress with a fresh countdown.
    pub fn begin(
        &mut self,
        title: String,
        source: QuestionSource,
        questions: Vec<QuestionWrapper>,
        time_limit: Duration,
    ) {
        if self.status != SessionStatus::Loading {
            return;
        }
        self.title = title;
        self.source = source;
        self.questions = questions;
        self.current_index = 0;
        self.remaining_seconds = time_limit.as_secs();
        self.status = SessionStatus::InProgress;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_not_found(&mut self) {
        if self.status == SessionStatus::Loading {
            self.status = SessionStatus::NotFound;
        }
    }

    pub fn quiz_id(&self) -> i64 {
        self.quiz_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn questions(&self) -> &[QuestionWrapper] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuestionWrapper> {
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn score(&self) -> Option<i64> {
        self.score
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn answer_for(&self, question_id: i64) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Records an answer for the current question, replacing any earlier one.
    pub fn record_answer(&mut self, answer: &str) {
        if let Some(question_id) = self.current_question().map(|q| q.id) {
            self.record_answer_for(question_id, answer);
        }
    }

    pub fn record_answer_for(&mut self, question_id: i64, answer: &str) {
        if self.status != SessionStatus::InProgress {
            return;
        }
        self.answers.insert(question_id, answer.to_string());
    }

    /// Returns false when already on the last question.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already on the first question.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Advances the countdown by one second. `Expired` is reported once,
    /// on the tick that reaches zero.
    pub fn tick(&mut self) -> Tick {
        if self.status != SessionStatus::InProgress || self.remaining_seconds == 0 {
            return Tick::Idle;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            Tick::Expired
        } else {
            Tick::Running
        }
    }

    /// Responses for every answered question, ordered by question id.
    pub fn responses(&self) -> Vec<QuestionResponse> {
        let mut responses: Vec<QuestionResponse> = self
            .answers
            .iter()
            .map(|(id, response)| QuestionResponse {
                id: *id,
                response: response.clone(),
            })
            .collect();
        responses.sort_by_key(|r| r.id);
        responses
    }

    pub fn complete(&mut self, score: i64) {
        if self.status == SessionStatus::InProgress {
            self.score = Some(score);
            self.status = SessionStatus::Completed;
            self.finished_at = Some(Utc::now());
        }
    }

    pub fn fail_submission(&mut self) {
        if self.status == SessionStatus::InProgress {
            self.status = SessionStatus::SubmissionFailed;
            self.finished_at = Some(Utc::now());
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Completed | SessionStatus::SubmissionFailed | SessionStatus::NotFound
        )
    }

    /// Score as a share of every question in the session, unanswered ones included.
    pub fn percentage(&self) -> i64 {
        let total = self.questions.len().max(1) as f64;
        let score = self.score.unwrap_or(0) as f64;
        (score / total * 100.0).round() as i64
    }

    pub fn progress_percentage(&self) -> i64 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0).round() as i64
    }
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
