use std::io::Write;

use crate::errors::AppResult;

pub mod question_handler;
pub mod quiz_handler;
pub mod session_handler;

pub use question_handler::{add_question, list_questions};
pub use quiz_handler::{create_quiz, list_quizzes};
pub use session_handler::take_quiz;

/// Flushes command output, logging a failure before returning it.
pub fn flush_output<W: Write>(out: &mut W) -> AppResult<()> {
    out.flush().map_err(|e| {
        log::warn!("Failed to flush output: {}", e);
        e.into()
    })
}
