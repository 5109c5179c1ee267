use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A question bank record as served by `GET /allQuestions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub question_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option4: String,
    #[serde(deserialize_with = "null_as_default")]
    pub right_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficultylevel: Option<String>,
}

impl Question {
    pub fn options(&self) -> [&str; 4] {
        [&self.option1, &self.option2, &self.option3, &self.option4]
    }

    /// Compares a displayed option with the stored right answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.right_answer == option
    }
}

/// A question stripped of its answer, as handed out for quiz sessions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionWrapper {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub question_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option4: String,
}

impl QuestionWrapper {
    pub fn options(&self) -> [&str; 4] {
        [&self.option1, &self.option2, &self.option3, &self.option4]
    }
}

impl From<Question> for QuestionWrapper {
    fn from(question: Question) -> Self {
        QuestionWrapper {
            id: question.id,
            question_title: question.question_title,
            option1: question.option1,
            option2: question.option2,
            option3: question.option3,
            option4: question.option4,
        }
    }
}

/// Distinct categories in first-seen order.
pub fn unique_categories(questions: &[Question]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for question in questions {
        if !categories.iter().any(|c| c == &question.category) {
            categories.push(question.category.clone());
        }
    }
    categories
}
