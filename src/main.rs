//! talksum - WebVTT transcript analysis and AI-powered meeting summaries
//!
//! Entry point for the talksum CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use talksum::cli::{Cli, Commands};
use talksum::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            talksum::cli::completions::print(shell);
        }
        Commands::Speakers { file, json } => {
            talksum::cli::commands::show_speakers(&file, json)?;
        }
        Commands::Text { file } => {
            talksum::cli::commands::show_text(&file)?;
        }
        command => {
            // Load configuration only for commands that need it.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize { file, creativity } => {
                    talksum::cli::commands::summarize_transcript(&settings, &file, creativity)
                        .await?;
                }
                Commands::Config(config_cmd) => {
                    talksum::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. }
                | Commands::Speakers { .. }
                | Commands::Text { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
