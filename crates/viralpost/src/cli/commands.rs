//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ViralPost - rewrite any text into a viral social-media post with an illustration
#[derive(Parser, Debug)]
#[command(name = "viralpost")]
#[command(about = "Rewrite any text into a viral social-media post with an illustration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a post from text
    Generate(GenerateArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source text; read from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the source text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Write the illustration to this PNG file
    #[arg(long)]
    pub image_out: Option<PathBuf>,

    /// Save the illustration under a timestamped default name
    #[arg(long)]
    pub save_image: bool,

    /// Write the paste-ready post text to this file
    #[arg(long)]
    pub copy_out: Option<PathBuf>,

    /// Print the post as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}
