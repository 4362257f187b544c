//! WebVTT to plain text conversion.

use regex::Regex;

/// Convert WebVTT content to the concatenated spoken text.
///
/// Drops the `WEBVTT` header block, `NOTE`/`STYLE`/`REGION` blocks, cue
/// identifiers, and timing lines, then strips inline markup tags from the
/// remaining cue text. Lines are joined with single spaces.
pub fn to_plain_text(content: &str) -> String {
    let markup_re = Regex::new(r"<[^>]*>").ok();
    let mut pieces: Vec<String> = Vec::new();
    let mut skip_block = false;

    let mut lines = content.lines().peekable();
    while let Some(raw) = lines.next() {
        let line = raw.trim();

        if line.is_empty() {
            skip_block = false;
            continue;
        }
        if skip_block {
            continue;
        }

        // Header and metadata blocks run until the next blank line.
        if line.starts_with("WEBVTT")
            || line.starts_with("NOTE")
            || line.starts_with("STYLE")
            || line.starts_with("REGION")
        {
            skip_block = true;
            continue;
        }

        // Timing line of a cue.
        if line.contains("-->") {
            continue;
        }

        // Cue identifier: the line immediately before a timing line.
        if lines
            .peek()
            .map(|next| next.contains("-->"))
            .unwrap_or(false)
        {
            continue;
        }

        let text = strip_markup(line, markup_re.as_ref());
        if !text.is_empty() {
            pieces.push(text);
        }
    }

    pieces.join(" ")
}

/// Remove inline cue markup (`<v Name>`, `<c>`, `<b>`, timestamps) and
/// decode the basic character entities.
fn strip_markup(line: &str, markup_re: Option<&Regex>) -> String {
    let stripped = match markup_re {
        Some(re) => re.replace_all(line, "").into_owned(),
        None => line.to_string(),
    };

    stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_header_and_timing_lines() {
        let content = "WEBVTT\nKind: captions\n\n00:00:00.000 --> 00:00:02.000\nHello there\n";
        assert_eq!(to_plain_text(content), "Hello there");
    }

    #[test]
    fn strips_voice_tags_from_cue_text() {
        let content =
            "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\n<v Alice>Hello</v>\n\n00:00:02.000 --> 00:00:04.000\n<v Bob>Hi Alice</v>\n";
        assert_eq!(to_plain_text(content), "Hello Hi Alice");
    }

    #[test]
    fn skips_cue_identifiers() {
        let content = "WEBVTT\n\n1\n00:00:00.000 --> 00:00:02.000\nFirst cue\n\nintro-cue\n00:00:02.000 --> 00:00:04.000\nSecond cue\n";
        assert_eq!(to_plain_text(content), "First cue Second cue");
    }

    #[test]
    fn skips_note_blocks() {
        let content = "WEBVTT\n\nNOTE\nThis is a comment\nspanning two lines\n\n00:00:00.000 --> 00:00:02.000\nSpoken text\n";
        assert_eq!(to_plain_text(content), "Spoken text");
    }

    #[test]
    fn joins_multi_line_cues_with_spaces() {
        let content =
            "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nfirst line\nsecond line\n";
        assert_eq!(to_plain_text(content), "first line second line");
    }

    #[test]
    fn decodes_basic_entities() {
        let content = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nfish &amp; chips\n";
        assert_eq!(to_plain_text(content), "fish & chips");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(to_plain_text(""), "");
    }
}
