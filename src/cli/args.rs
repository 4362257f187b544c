//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// talksum - WebVTT transcript analysis and AI-powered meeting summaries
#[derive(Parser, Debug)]
#[command(name = "talksum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the speakers found in a transcript
    Speakers {
        /// Path to the WebVTT transcript
        file: PathBuf,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the extracted plain text of a transcript
    Text {
        /// Path to the WebVTT transcript
        file: PathBuf,
    },

    /// Generate an AI summary of a transcript
    Summarize {
        /// Path to the WebVTT transcript
        file: PathBuf,

        /// Creativity level (sampling temperature), 0 to 1
        #[arg(short, long, default_value_t = 0.7, value_parser = parse_creativity)]
        creativity: f32,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_creativity(value: &str) -> Result<f32, String> {
    let parsed: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err("creativity must be between 0 and 1".to_string());
    }
    Ok(parsed)
}
