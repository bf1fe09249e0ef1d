#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    AskInput, AskStrategy, CommandStrategy, InfoStrategy, InitStrategy, RecordInput,
    RecordStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "medscribe")]
#[command(about = "medscribe AI medical assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and summarize a patient encounter
    Record {
        /// Capture duration in seconds
        #[arg(short, long)]
        seconds: Option<u64>,

        /// Use an already-transcribed encounter instead of capturing audio
        #[arg(short, long)]
        text: Option<String>,

        /// Transcribe an existing WAV file instead of capturing audio
        #[arg(short, long)]
        audio: Option<PathBuf>,
    },
    /// Ask a question over the stored patient records
    Ask {
        /// Typed question (captures a spoken question when omitted)
        #[arg(short, long)]
        message: Option<String>,

        /// Capture duration for a spoken question in seconds
        #[arg(short, long)]
        seconds: Option<u64>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and store status
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Record {
            seconds,
            text,
            audio,
        } => {
            info!("Running record command");
            RecordStrategy
                .execute(RecordInput {
                    seconds,
                    text,
                    audio,
                })
                .await
        }
        Commands::Ask { message, seconds } => {
            info!("Running ask command");
            AskStrategy.execute(AskInput { message, seconds }).await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
