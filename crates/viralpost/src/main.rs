//! ViralPost CLI binary.
//!
//! This binary provides command-line access to ViralPost's functionality:
//! - Generate a post (and illustration) from text, a file, or stdin
//! - Inspect the effective configuration

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, ConfigCommands, run_generate, show_config};

    // Parse command-line arguments
    let cli = Cli::parse();

    // A local .env may carry GEMINI_API_KEY
    let _ = dotenvy::dotenv();

    if let Err(e) = viralpost::telemetry::init_logging(cli.verbose, cli.json_logs) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args, cli.config_file.as_deref()).await,
        Commands::Config(ConfigCommands::Show) => show_config(cli.config_file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("Error: {}", viralpost::presentation::error_banner(&e));
            ExitCode::FAILURE
        }
    }
}
