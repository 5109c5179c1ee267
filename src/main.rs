use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use quiz_console::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    handlers,
    models::{
        domain::{Difficulty, QuizStatus, SessionStatus},
        dto::request::{CreateQuestionRequest, CreateQuizRequest},
    },
};

#[derive(Parser)]
#[command(author, version, about = "Take and author quizzes against the quiz services", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and author questions
    Questions {
        #[command(subcommand)]
        command: QuestionCommands,
    },
    /// Browse and author quizzes
    Quizzes {
        #[command(subcommand)]
        command: QuizCommands,
    },
    /// Take a timed quiz
    Take { id: i64 },
}

#[derive(Subcommand)]
enum QuestionCommands {
    /// List the question bank
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Hide a question from this listing (not deleted on the server)
        #[arg(long = "delete")]
        delete: Vec<i64>,
    },
    /// Add a question to the bank
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        option1: String,
        #[arg(long)]
        option2: String,
        #[arg(long)]
        option3: String,
        #[arg(long)]
        option4: String,
        /// Text of the correct option
        #[arg(long)]
        answer: String,
        #[arg(long)]
        difficulty: Option<String>,
    },
}

#[derive(Subcommand)]
enum QuizCommands {
    /// List quizzes derived from the bank's categories
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a quiz
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
        #[arg(long = "questions", default_value_t = 10)]
        question_count: u32,
        #[arg(long = "time-limit", default_value_t = 15)]
        time_limit_minutes: u32,
        #[arg(long, value_enum, default_value = "draft")]
        status: StatusArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StatusArg {
    Draft,
    Published,
}

impl From<StatusArg> for QuizStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Draft => QuizStatus::Draft,
            StatusArg::Published => QuizStatus::Published,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let state = match AppState::new(Config::from_env()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("[{}] {}", e.error_code(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    let result = run(cli.command, &state, &mut stdout).await;
    let flushed = handlers::flush_output(&mut stdout);

    match result.and(flushed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run<W: Write>(command: Commands, state: &AppState, out: &mut W) -> AppResult<()> {
    match command {
        Commands::Questions {
            command:
                QuestionCommands::List {
                    search,
                    category,
                    delete,
                },
        } => {
            handlers::list_questions(
                &state.question_service,
                category.as_deref(),
                search.as_deref(),
                &delete,
                out,
            )
            .await?;
        }
        Commands::Questions {
            command:
                QuestionCommands::Add {
                    title,
                    category,
                    option1,
                    option2,
                    option3,
                    option4,
                    answer,
                    difficulty,
                },
        } => {
            let request = CreateQuestionRequest {
                question_title: title,
                option1,
                option2,
                option3,
                option4,
                right_answer: answer,
                category,
                difficultylevel: difficulty,
            };
            handlers::add_question(&state.question_service, request, out).await?;
        }
        Commands::Quizzes {
            command: QuizCommands::List { search },
        } => {
            handlers::list_quizzes(&state.quiz_service, search.as_deref(), out).await?;
        }
        Commands::Quizzes {
            command:
                QuizCommands::Create {
                    title,
                    category,
                    description,
                    difficulty,
                    question_count,
                    time_limit_minutes,
                    status,
                },
        } => {
            let request = CreateQuizRequest {
                title,
                description,
                category,
                difficulty: difficulty.map(Difficulty::from),
                question_count,
                time_limit_minutes,
                status: status.into(),
            };
            handlers::create_quiz(&state.quiz_service, request, out).await?;
        }
        Commands::Take { id } => {
            let input = BufReader::new(tokio::io::stdin());
            let session = handlers::take_quiz(&state.session_service, id, input, out).await?;
            if session.status() == SessionStatus::NotFound {
                return Err(AppError::NotFound(format!("quiz {}", id)));
            }
        }
    }
    Ok(())
}
