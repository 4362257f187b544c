//! Transcript analysis for talksum
//!
//! Converts WebVTT captions to plain text and extracts the speaker roster.

mod speakers;
mod vtt;

pub use speakers::{extract_speakers, SpeakerStats};
pub use vtt::to_plain_text;

use serde::Serialize;
use std::path::Path;

use crate::{Result, TalksumError};

/// Maximum number of characters kept from the converted transcript.
pub const PLAIN_TEXT_LIMIT: usize = 1000;

/// Result of analyzing one WebVTT transcript.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscriptAnalysis {
    /// Spoken text with cue markup stripped, at most [`PLAIN_TEXT_LIMIT`] chars.
    pub plain_text: String,

    /// Unique speaker names in first-appearance order.
    pub speakers: Vec<String>,

    /// Speaker with the highest total voice-tag count, if any tags exist.
    pub most_frequent_speaker: Option<String>,
}

/// Analyze raw WebVTT content.
///
/// Empty content yields the default (empty) analysis; content without voice
/// tags yields an empty roster and no dominant speaker. Neither is an error.
pub fn analyze(content: &str) -> TranscriptAnalysis {
    if content.is_empty() {
        return TranscriptAnalysis::default();
    }

    let plain_text = truncate_chars(&vtt::to_plain_text(content), PLAIN_TEXT_LIMIT);
    let stats = speakers::extract_speakers(content);

    TranscriptAnalysis {
        plain_text,
        most_frequent_speaker: stats.most_frequent().map(str::to_string),
        speakers: stats.into_names(),
    }
}

/// Read a `.vtt` file and analyze its content.
pub fn analyze_file(path: &Path) -> Result<TranscriptAnalysis> {
    if !path.exists() {
        return Err(TalksumError::NotFound(format!(
            "Transcript file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(analyze(&content))
}

/// Keep the first `limit` characters of `s`, respecting char boundaries.
///
/// Idempotent: a string already within the limit is returned unchanged.
fn truncate_chars(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
