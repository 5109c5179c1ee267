use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::errors::{AppError, AppResult};

const QUESTION_SERVICE_PATH: &str = "Question";
const QUIZ_SERVICE_PATH: &str = "quiz";
const MAX_SESSION_TIME_LIMIT_MINUTES: u64 = 24 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub question_service_url: String,
    pub quiz_service_url: String,
    pub session_time_limit_minutes: u64,
    pub generated_question_count: usize,
}

impl Config {
    /// Builds a config for the given service roots with default session settings.
    pub fn new(question_service_url: &str, quiz_service_url: &str) -> Self {
        Self {
            question_service_url: question_service_url.to_string(),
            quiz_service_url: quiz_service_url.to_string(),
            session_time_limit_minutes: 15,
            generated_question_count: 10,
        }
    }

    pub fn from_env() -> Self {
        Self {
            question_service_url: env::var("QUESTION_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            quiz_service_url: env::var("QUIZ_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8090".to_string()),
            session_time_limit_minutes: env::var("SESSION_TIME_LIMIT_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(15),
            generated_question_count: env::var("GENERATED_QUESTION_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Rejects service roots that are not absolute http(s) URLs and zero tunables.
    pub fn validate(&self) -> AppResult<()> {
        self.question_base_url()?;
        self.quiz_base_url()?;

        if self.session_time_limit_minutes == 0 {
            return Err(AppError::ConfigError(
                "SESSION_TIME_LIMIT_MINUTES must be greater than zero".to_string(),
            ));
        }

        if self.session_time_limit_minutes > MAX_SESSION_TIME_LIMIT_MINUTES {
            return Err(AppError::ConfigError(format!(
                "SESSION_TIME_LIMIT_MINUTES must be at most {}",
                MAX_SESSION_TIME_LIMIT_MINUTES
            )));
        }

        if self.generated_question_count == 0 {
            return Err(AppError::ConfigError(
                "GENERATED_QUESTION_COUNT must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn question_base_url(&self) -> AppResult<Url> {
        service_url(&self.question_service_url, QUESTION_SERVICE_PATH)
    }

    pub fn quiz_base_url(&self) -> AppResult<Url> {
        service_url(&self.quiz_service_url, QUIZ_SERVICE_PATH)
    }

    pub fn session_time_limit(&self) -> Duration {
        Duration::from_secs(self.session_time_limit_minutes.saturating_mul(60))
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            question_service_url: "http://127.0.0.1:18080".to_string(),
            quiz_service_url: "http://127.0.0.1:18090".to_string(),
            session_time_limit_minutes: 15,
            generated_question_count: 10,
        }
    }
}

fn service_url(root: &str, path: &str) -> AppResult<Url> {
    let raw = format!("{}/{}", root.trim_end_matches('/'), path);
    let url = Url::parse(&raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid service URL '{}': {}", root, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::ConfigError(format!(
            "Unsupported scheme '{}' in service URL '{}'",
            scheme, root
        ))),
    }
}
