mod config;
mod errors;
mod generation;
mod llm_client;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::generator::ContentGenerator;
use crate::generation::prompts::DEFAULT_SUBJECT;
use crate::llm_client::LlmClient;

/// Generate presentation content for a subject with a hosted LLM.
///
/// Writes `<subject>.json` (raw model output) and `<subject>.typ` (Typst markup).
#[derive(Debug, Parser)]
#[command(name = "slidegen", author, version, about)]
struct Cli {
    /// Subject to generate presentation content for
    #[arg(default_value = DEFAULT_SUBJECT)]
    subject: String,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Verbosity when RUST_LOG is unset (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first so a .env file can also set RUST_LOG
    let config = Config::from_env();

    init_logging(cli.verbose);

    info!("Starting slidegen v{}", env!("CARGO_PKG_VERSION"));

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Result<Config, AppError>) -> Result<(), AppError> {
    let config = config?;

    let llm = LlmClient::new(&config)?;
    info!(
        "LLM client initialized (endpoint: {}, model: {}, max retries: {})",
        llm.endpoint(),
        config.model,
        config.max_retries
    );

    let generator = ContentGenerator::new(Arc::new(llm), config.model);
    let paths = generation::pipeline::run(&generator, &cli.subject, &cli.output_dir).await?;

    info!(
        "Done: {} and {}",
        paths.json.display(),
        paths.typst.display()
    );
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
