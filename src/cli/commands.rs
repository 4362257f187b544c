//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, SummaryRequest};
use crate::session::{reduce, SessionEvent, SessionState};
use crate::transcript;

/// List the speakers found in a transcript
pub fn show_speakers(file: &Path, json: bool) -> Result<()> {
    let analysis = transcript::analyze_file(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if analysis.speakers.is_empty() {
        println!("No speakers found");
        return Ok(());
    }

    for speaker in &analysis.speakers {
        if analysis.most_frequent_speaker.as_deref() == Some(speaker.as_str()) {
            println!("{} (main speaker)", speaker);
        } else {
            println!("{}", speaker);
        }
    }

    Ok(())
}

/// Print the extracted plain text of a transcript
pub fn show_text(file: &Path) -> Result<()> {
    let analysis = transcript::analyze_file(file)?;

    if analysis.plain_text.is_empty() {
        println!("(no spoken text)");
    } else {
        println!("{}", analysis.plain_text);
    }

    Ok(())
}

/// Analyze a transcript and request an AI summary for it.
pub async fn summarize_transcript(settings: &Settings, file: &Path, creativity: f32) -> Result<()> {
    let analysis = transcript::analyze_file(file)?;

    let mut state = reduce(SessionState::default(), SessionEvent::CreativitySet(creativity));
    state = reduce(state, SessionEvent::TranscriptLoaded(analysis));

    // Local guard: an empty transcript never reaches the completion API.
    if state.plain_text.is_empty() {
        anyhow::bail!(
            "Transcript has no spoken text. Supply a .vtt file with cue content."
        );
    }

    let provider = build_provider(settings)?;

    state = reduce(state, SessionEvent::SummaryRequested);
    let generation = state.generation;

    tracing::debug!("Requesting summary (creativity {})", state.creativity);

    let outcome = provider
        .summarize(SummaryRequest {
            plain_text: &state.plain_text,
            creativity: state.creativity,
        })
        .await;

    state = match outcome {
        Ok(text) => reduce(state, SessionEvent::SummaryReceived { generation, text }),
        Err(error) => {
            tracing::error!("Summary request failed: {:#}", error);
            reduce(state, SessionEvent::SummaryFailed { generation })
        }
    };

    match state.summary.as_deref() {
        Some(summary) => {
            println!("Summary:");
            println!();
            println!("{}", summary);
        }
        None => {
            println!("(no summary produced; see logs for details)");
        }
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
