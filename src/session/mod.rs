//! Session state for talksum
//!
//! A single state container updated through a pure reducer, so the
//! analyze/summarize flow is testable without any presentation layer.

use serde::Serialize;

use crate::transcript::TranscriptAnalysis;

/// Default creativity (sampling temperature) for summary requests.
pub const DEFAULT_CREATIVITY: f32 = 0.7;

/// Everything one analyze/summarize session holds.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    /// Extracted plain text, at most the analyzer's character limit.
    pub plain_text: String,

    /// Unique speaker names in first-appearance order.
    pub speakers: Vec<String>,

    /// Speaker with the highest voice-tag count.
    pub most_frequent_speaker: Option<String>,

    /// Sampling temperature for the completion API.
    pub creativity: f32,

    /// Last successfully received summary.
    pub summary: Option<String>,

    /// True while a summary request is in flight.
    pub loading: bool,

    /// Identity of the newest summary request. Only responses carrying the
    /// current generation may commit.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            plain_text: String::new(),
            speakers: Vec::new(),
            most_frequent_speaker: None,
            creativity: DEFAULT_CREATIVITY,
            summary: None,
            loading: false,
            generation: 0,
        }
    }
}

/// Events the reducer understands.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A transcript was analyzed; publish its results.
    TranscriptLoaded(TranscriptAnalysis),

    /// The user adjusted the creativity level.
    CreativitySet(f32),

    /// A summary request is about to start.
    SummaryRequested,

    /// The completion API answered the request identified by `generation`.
    SummaryReceived { generation: u64, text: String },

    /// The request identified by `generation` failed.
    SummaryFailed { generation: u64 },
}

/// Apply one event to the state. Pure: no I/O, no side effects.
///
/// Stale responses (a generation older than the newest request) are
/// discarded entirely, so an overlapping request can neither overwrite a
/// newer summary nor clear a newer request's loading flag.
pub fn reduce(mut state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::TranscriptLoaded(analysis) => {
            state.plain_text = analysis.plain_text;
            state.speakers = analysis.speakers;
            state.most_frequent_speaker = analysis.most_frequent_speaker;
        }
        SessionEvent::CreativitySet(value) => {
            state.creativity = value;
        }
        SessionEvent::SummaryRequested => {
            state.generation += 1;
            state.loading = true;
        }
        SessionEvent::SummaryReceived { generation, text } => {
            if generation == state.generation {
                state.summary = Some(text.trim().to_string());
                state.loading = false;
            }
        }
        SessionEvent::SummaryFailed { generation } => {
            if generation == state.generation {
                state.loading = false;
            }
        }
    }

    state
}
