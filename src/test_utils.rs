#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Question, QuestionWrapper};
    use crate::models::dto::request::CreateQuestionRequest;

    /// A question whose right answer is its first option.
    pub fn question(id: i64, title: &str, category: &str) -> Question {
        Question {
            id,
            question_title: title.to_string(),
            option1: format!("Option A{}", id),
            option2: format!("Option B{}", id),
            option3: format!("Option C{}", id),
            option4: format!("Option D{}", id),
            right_answer: format!("Option A{}", id),
            category: category.to_string(),
            difficultylevel: None,
        }
    }

    /// Session questions with ids `1..=count`.
    pub fn wrappers(count: usize) -> Vec<QuestionWrapper> {
        (1..=count as i64)
            .map(|id| question(id, &format!("Question {}", id), "General").into())
            .collect()
    }

    pub fn valid_question_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            question_title: "Which type is a growable array?".to_string(),
            option1: "Vec".to_string(),
            option2: "Box".to_string(),
            option3: "Rc".to_string(),
            option4: "Cell".to_string(),
            right_answer: "Vec".to_string(),
            category: "Programming".to_string(),
            difficultylevel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question() {
        let q = question(3, "Joins", "Database");
        assert_eq!(q.right_answer, "Option A3");
        assert!(q.is_correct(&q.option1));
    }

    #[test]
    fn test_fixtures_wrappers() {
        let ws = wrappers(3);
        assert_eq!(ws.len(), 3);
        assert_eq!(ws[0].id, 1);
        assert_eq!(ws[2].option1, "Option A3");
    }
}
