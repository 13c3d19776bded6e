use crate::demo::{run_batch, run_originality, run_score, BatchArgs, OriginalityArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use copydesk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Copydesk",
    about = "Run the editorial pre-publication gate from the command line",
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
    /// Score or verify articles without starting the service
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReviewCommand {
    /// Score a single article from a text file
    Score(ScoreArgs),
    /// Score every article in an editorial CSV export
    Batch(BatchArgs),
    /// Check a single article for copied sentences
    Originality(OriginalityArgs),
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
        Command::Review {
            command: ReviewCommand::Score(args),
        } => run_score(args),
        Command::Review {
            command: ReviewCommand::Batch(args),
        } => run_batch(args),
        Command::Review {
            command: ReviewCommand::Originality(args),
        } => run_originality(args).await,
    }
}
