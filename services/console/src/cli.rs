use crate::demo::{run_assess, run_demo, run_quiz, AssessArgs, DemoArgs, QuizArgs};
use aesthetic_ai::config::AppConfig;
use aesthetic_ai::error::AppError;
use aesthetic_ai::telemetry;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Aesthetic Assessment Console",
    about = "Score subject findings and quiz answers from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end demo with a built-in sample catalog (default command)
    Demo(DemoArgs),
    /// Score a subject export against an assessment catalog
    Assess(AssessArgs),
    /// Classify quiz answers from a subject export and emit the result payload
    Quiz(QuizArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(?config.environment, "aesthetic assessment console starting");

    match cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default())) {
        Command::Demo(args) => run_demo(args),
        Command::Assess(args) => run_assess(args, &config),
        Command::Quiz(args) => run_quiz(args, &config),
    }
}
