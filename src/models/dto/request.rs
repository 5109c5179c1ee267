use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::category::is_known_category;
use crate::models::domain::{Difficulty, Quiz, QuizStatus};

/// Question authoring form. Serializes as the question record without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_right_answer_is_an_option"))]
pub struct CreateQuestionRequest {
    #[validate(custom(function = "not_blank", message = "Please enter a question"))]
    pub question_title: String,

    #[validate(length(min = 1, message = "Please fill in all four options"))]
    pub option1: String,

    #[validate(length(min = 1, message = "Please fill in all four options"))]
    pub option2: String,

    #[validate(length(min = 1, message = "Please fill in all four options"))]
    pub option3: String,

    #[validate(length(min = 1, message = "Please fill in all four options"))]
    pub option4: String,

    #[validate(length(min = 1, message = "Please select the correct answer"))]
    pub right_answer: String,

    #[validate(custom(function = "known_category", message = "Please select a category"))]
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficultylevel: Option<String>,
}

/// Quiz authoring form. Only title, category and question count reach the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(custom(function = "not_blank", message = "Please enter a quiz title"))]
    pub title: String,

    pub description: String,

    #[validate(custom(function = "known_category", message = "Please select a category"))]
    pub category: String,

    pub difficulty: Option<Difficulty>,

    #[validate(range(min = 5, max = 50, message = "Number of questions must be between 5 and 50"))]
    pub question_count: u32,

    #[validate(range(min = 5, max = 120, message = "Time limit must be between 5 and 120 minutes"))]
    pub time_limit_minutes: u32,

    pub status: QuizStatus,
}

impl Default for CreateQuizRequest {
    fn default() -> Self {
        CreateQuizRequest {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            difficulty: None,
            question_count: 10,
            time_limit_minutes: 15,
            status: QuizStatus::Draft,
        }
    }
}

impl From<CreateQuizRequest> for Quiz {
    fn from(request: CreateQuizRequest) -> Self {
        Quiz {
            title: request.title,
            description: request.description,
            category: request.category,
            difficulty: request.difficulty,
            question_count: request.question_count,
            time_limit_minutes: request.time_limit_minutes,
            status: request.status,
        }
    }
}

/// Body of `POST /quiz/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDto {
    pub category: String,
    #[serde(rename = "noOfquestions")]
    pub no_of_questions: u32,
    pub title: String,
}

impl From<&Quiz> for QuizDto {
    fn from(quiz: &Quiz) -> Self {
        QuizDto {
            category: quiz.category.clone(),
            no_of_questions: quiz.question_count,
            title: quiz.title.clone(),
        }
    }
}

/// One answered question sent for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub response: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn known_category(value: &str) -> Result<(), ValidationError> {
    if !is_known_category(value) {
        return Err(ValidationError::new("unknown_category"));
    }
    Ok(())
}

fn validate_right_answer_is_an_option(
    request: &CreateQuestionRequest,
) -> Result<(), ValidationError> {
    // An empty answer is already reported by the field rule.
    if request.right_answer.is_empty() {
        return Ok(());
    }

    let options = [
        &request.option1,
        &request.option2,
        &request.option3,
        &request.option4,
    ];
    let matches = options
        .iter()
        .filter(|option| ***option == request.right_answer)
        .count();

    let (code, message) = match matches {
        1 => return Ok(()),
        0 => (
            "right_answer_not_an_option",
            "The correct answer must be one of the four options",
        ),
        _ => (
            "right_answer_ambiguous",
            "The correct answer must match exactly one option",
        ),
    };

    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}
