use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Option<Difficulty>,
    pub question_count: u32,
    pub time_limit_minutes: u32,
    pub status: QuizStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Difficulty implied by how many questions a category holds.
    pub fn for_question_count(count: usize) -> Self {
        if count > 15 {
            Difficulty::Advanced
        } else if count > 8 {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizStatus::Draft => f.write_str("draft"),
            QuizStatus::Published => f.write_str("published"),
        }
    }
}

/// Catalog entry for a quiz derived from one question category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizPreview {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub time_limit_minutes: u32,
}

impl QuizPreview {
    pub const MAX_QUESTIONS: usize = 10;
    pub const TIME_LIMIT_MINUTES: u32 = 15;

    /// `position` is zero-based; preview ids start at 1 so that a session
    /// for the same id falls back to this category.
    pub fn for_category(position: usize, category: &str, available_questions: usize) -> Self {
        QuizPreview {
            id: position as i64 + 1,
            title: format!("{} Quiz", category),
            description: format!("Test your knowledge of {}", category),
            category: category.to_string(),
            difficulty: Difficulty::for_question_count(available_questions),
            question_count: available_questions.min(Self::MAX_QUESTIONS),
            time_limit_minutes: Self::TIME_LIMIT_MINUTES,
        }
    }
}
