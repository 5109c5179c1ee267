pub mod category;
pub mod question;
pub mod quiz;
pub mod quiz_session;
pub use question::{Question, QuestionWrapper};
pub use quiz::{Difficulty, Quiz, QuizPreview, QuizStatus};
pub use quiz_session::{QuestionSource, QuizSession, SessionStatus, Tick};
