use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    errors::AppResult,
    models::domain::{quiz_session::format_time, QuizSession, SessionStatus, Tick},
    services::quiz_session_service::{countdown_interval, QuizSessionService},
};

/// A line typed during a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Zero-based option index.
    Select(usize),
    Next,
    Previous,
    Submit,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "1" | "2" | "3" | "4" => line
                .parse::<usize>()
                .map(|n| SessionCommand::Select(n - 1))
                .unwrap_or_else(|_| SessionCommand::Unknown(line.to_string())),
            "n" | "next" => SessionCommand::Next,
            "p" | "prev" | "previous" => SessionCommand::Previous,
            "s" | "submit" => SessionCommand::Submit,
            "q" | "quit" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(line.to_string()),
        }
    }
}

/// Runs an interactive quiz until it is submitted, times out or is abandoned.
///
/// Input and the countdown are multiplexed on the calling task. Once input
/// is exhausted the countdown keeps running until the time limit submits.
pub async fn take_quiz<R, W>(
    service: &QuizSessionService,
    quiz_id: i64,
    input: R,
    out: &mut W,
) -> AppResult<QuizSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Loading quiz...")?;
    let mut session = service.load(quiz_id).await;
    if session.status() == SessionStatus::NotFound {
        writeln!(out, "Quiz not found")?;
        return Ok(session);
    }

    render_question(&session, out)?;

    let mut lines = input.lines();
    let mut input_open = true;
    let mut ticker = countdown_interval();

    while session.status() == SessionStatus::InProgress {
        tokio::select! {
            _ = ticker.tick() => {
                match service.tick(&mut session).await {
                    Tick::Expired => writeln!(out, "Time is up!")?,
                    Tick::Running if announces_remaining(session.remaining_seconds()) => {
                        writeln!(
                            out,
                            "Time remaining: {}",
                            format_time(session.remaining_seconds())
                        )?
                    }
                    _ => {}
                }
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                match SessionCommand::parse(&line) {
                    SessionCommand::Select(index) => {
                        let option = session
                            .current_question()
                            .and_then(|q| q.options().get(index).map(|o| o.to_string()));
                        if let Some(option) = option {
                            session.record_answer(&option);
                        }
                        render_question(&session, out)?;
                    }
                    SessionCommand::Next => {
                        if !session.next() {
                            writeln!(out, "This is the last question. Type s to submit.")?;
                        }
                        render_question(&session, out)?;
                    }
                    SessionCommand::Previous => {
                        if !session.previous() {
                            writeln!(out, "This is the first question.")?;
                        }
                        render_question(&session, out)?;
                    }
                    SessionCommand::Submit => service.submit(&mut session).await,
                    SessionCommand::Quit => {
                        writeln!(out, "Quiz abandoned.")?;
                        return Ok(session);
                    }
                    SessionCommand::Unknown(other) => {
                        writeln!(out, "Unknown command '{}'", other)?;
                        writeln!(out, "{}", HELP)?;
                    }
                }
            }
        }
    }

    render_summary(&session, out)?;
    Ok(session)
}

/// Whole minutes, the half-minute mark and the last ten seconds.
fn announces_remaining(seconds: u64) -> bool {
    seconds % 60 == 0 || seconds == 30 || seconds <= 10
}

const HELP: &str = "Commands: 1-4 select an option, n next, p previous, s submit, q quit";

pub fn render_question<W: Write>(session: &QuizSession, out: &mut W) -> AppResult<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}  [{}]",
        session.title(),
        format_time(session.remaining_seconds())
    )?;

    let Some(question) = session.current_question() else {
        writeln!(out, "This quiz has no questions. Type s to submit.")?;
        return Ok(());
    };

    writeln!(
        out,
        "Question {} of {} ({}% complete)",
        session.current_index() + 1,
        session.total_questions(),
        session.progress_percentage()
    )?;
    writeln!(out, "{}", question.question_title)?;

    let selected = session.answer_for(question.id);
    for (index, option) in question.options().iter().enumerate() {
        let marker = if selected == Some(*option) { "*" } else { " " };
        writeln!(out, "  {}. ({}) {}", index + 1, marker, option)?;
    }

    if session.is_last_question() {
        writeln!(out, "Last question: type s to submit the quiz.")?;
    }
    writeln!(out, "{}", HELP)?;
    Ok(())
}

pub fn render_summary<W: Write>(session: &QuizSession, out: &mut W) -> AppResult<()> {
    writeln!(out)?;
    match session.status() {
        SessionStatus::Completed => writeln!(out, "Quiz Completed!")?,
        SessionStatus::SubmissionFailed => {
            writeln!(out, "Your answers could not be scored. Please try again later.")?
        }
        SessionStatus::NotFound => {
            writeln!(out, "Quiz not found")?;
            return Ok(());
        }
        SessionStatus::Loading | SessionStatus::InProgress => return Ok(()),
    }

    writeln!(out, "Your Score: {}%", session.percentage())?;
    writeln!(
        out,
        "Correct: {} / {}",
        session.score().unwrap_or(0),
        session.total_questions()
    )?;
    writeln!(
        out,
        "Answered: {} / {}",
        session.answered_count(),
        session.total_questions()
    )?;

    if let (Some(started), Some(finished)) = (session.started_at(), session.finished_at()) {
        let elapsed = (finished - started).num_seconds().max(0) as u64;
        writeln!(out, "Time taken: {}", format_time(elapsed))?;
    }
    Ok(())
}
