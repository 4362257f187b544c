//! talksum - WebVTT transcript analysis and AI-powered meeting summaries
//!
//! Reads a WebVTT transcript, extracts the spoken text and speaker roster,
//! and asks a hosted completion API what the conversation was about.

pub mod cli;
pub mod config;
pub mod llm;
pub mod session;
pub mod transcript;

use thiserror::Error;

/// Main error type for talksum
#[derive(Error, Debug)]
pub enum TalksumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("Summary error: {0}")]
    Summary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TalksumError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "talksum";
