use crate::demo::{run_analyze, run_demo, run_questions, AnalyzeArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hair_profile::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hair Profile",
    about = "Classify hair texture from quiz answers and serve care recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the quiz catalog or analyze a set of answers
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Walk through a sample questionnaire and a photo-based hair type override
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print the ordered question catalog with option values
    Questions,
    /// Run the classification and recommendation pipeline over answers
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Questions,
        } => {
            run_questions();
            Ok(())
        }
        Command::Quiz {
            command: QuizCommand::Analyze(args),
        } => run_analyze(args),
        Command::Demo(args) => run_demo(args),
    }
}
