//! Speaker extraction from WebVTT voice tags.

use regex::Regex;
use std::collections::HashMap;

/// Speaker roster with per-speaker voice-tag counts.
#[derive(Debug, Clone, Default)]
pub struct SpeakerStats {
    names: Vec<String>,
    counts: HashMap<String, usize>,
}

impl SpeakerStats {
    /// Unique speaker names in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Total voice-tag occurrences for `name`, zero if unseen.
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// The speaker with the highest total tag count.
    ///
    /// Ties keep first-appearance order: the ranking is a stable sort of the
    /// deduplicated roster by descending count, so the earliest speaker to
    /// reach the maximum wins.
    pub fn most_frequent(&self) -> Option<&str> {
        let mut ranked: Vec<&String> = self.names.iter().collect();
        ranked.sort_by(|a, b| self.count(b).cmp(&self.count(a)));
        ranked.first().map(|name| name.as_str())
    }

    /// Consume the stats, keeping only the ordered roster.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Scan raw WebVTT content for `<v NAME>` voice tags.
///
/// Names are trimmed and deduplicated case-sensitively, preserving
/// first-appearance order; counts cover every tag occurrence.
pub fn extract_speakers(content: &str) -> SpeakerStats {
    let mut stats = SpeakerStats::default();

    if let Ok(re) = Regex::new(r"<v\s+([^>]+)>") {
        for capture in re.captures_iter(content) {
            let name = capture[1].trim();
            if name.is_empty() {
                continue;
            }

            let count = stats.counts.entry(name.to_string()).or_insert(0);
            *count += 1;
            if *count == 1 {
                stats.names.push(name.to_string());
            }
        }
    }

    stats
}
