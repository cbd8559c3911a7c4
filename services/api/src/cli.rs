use crate::demo::{
    run_archetype_score, run_compass_score, run_demo, ArchetypeScoreArgs, CompassScoreArgs,
    DemoArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fit_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fit Assessment",
    about = "Score, demo, and serve the partnership FIT and brand compass assessments",
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
    /// Score archetype answers or open a shared result link
    Archetype {
        #[command(subcommand)]
        command: ArchetypeCommand,
    },
    /// Score compass slider ratings
    Compass {
        #[command(subcommand)]
        command: CompassCommand,
    },
    /// Walk a scripted respondent through both assessments
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ArchetypeCommand {
    /// Classify a set of answers and print the result
    Score(ArchetypeScoreArgs),
}

#[derive(Subcommand, Debug)]
enum CompassCommand {
    /// Average slider ratings and print the band copy
    Score(CompassScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Webhook target: `test` or `production`
    #[arg(long)]
    pub(crate) webhook_mode: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Archetype {
            command: ArchetypeCommand::Score(args),
        } => run_archetype_score(args),
        Command::Compass {
            command: CompassCommand::Score(args),
        } => run_compass_score(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
