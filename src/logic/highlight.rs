//! Match Highlighting
//!
//! Splits result text around case-insensitive occurrences of the current
//! query so the renderer can mark matched spans. Pure; the ratatui adapter
//! lives in ui::dropdown.

use regex::RegexBuilder;

/// One piece of a highlighted text, in original casing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` around case-insensitive occurrences of `highlight`
///
/// Returns `None` for absent text. Concatenating the segment texts always
/// reconstructs `text` exactly. An empty `highlight` is treated as "no
/// matches" rather than handed to the regex engine, where an empty pattern
/// would match between every character.
pub fn highlight_text(text: Option<&str>, highlight: &str) -> Option<Vec<Segment>> {
    let text = text?;

    if highlight.is_empty() {
        return Some(vec![Segment::plain(text)]);
    }

    // Escaped literal, so user input can't inject pattern syntax
    let pattern = match RegexBuilder::new(&regex::escape(highlight))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return Some(vec![Segment::plain(text)]),
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment::matched(m.as_str()));
        last = m.end();
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    Some(segments)
}
