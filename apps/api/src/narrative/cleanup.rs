//! Post-processing of raw completions: label and markdown stripping, sentence-aware
//! truncation, and splitting a suggestion completion into list items.

use std::sync::OnceLock;

use regex::Regex;

pub const MAX_INSIGHT_CHARS: usize = 600;
pub const MAX_SUGGESTION_CHARS: usize = 240;
pub const MAX_SUGGESTIONS: usize = 6;
/// Lines this short or shorter are never suggestions.
const MIN_SUGGESTION_LINE_CHARS: usize = 10;

fn leading_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(Insight:|AI Insight:|Response:|Compassionate Insight:|Caring Insight:|Based on|Here are|Here's what|I'd like to offer|Let me share)",
        )
        .expect("valid label regex")
    })
}

fn leading_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\*.*?\*\*:?\s*").expect("valid heading regex"))
}

fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+[.)]\s*|[-*•]\s*)").expect("valid marker regex"))
}

fn inline_markdown() -> &'static [Regex; 3] {
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"),
            Regex::new(r"\*(.*?)\*").expect("valid italic regex"),
            Regex::new(r"`(.*?)`").expect("valid code regex"),
        ]
    })
}

/// Replaces `**x**`, `*x*` and `` `x` `` with `x`.
pub fn strip_inline_markdown(text: &str) -> String {
    inline_markdown()
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "$1").into_owned())
}

/// Cleans a raw insight completion. Returns "" when nothing usable remains.
pub fn clean_insight(raw: &str) -> String {
    let text = raw.trim();
    let text = leading_label().replace(text, "");
    let text = leading_heading().replace(text.trim_start(), "");
    let text = text.trim_start();
    let text = text.strip_prefix('-').unwrap_or(text);
    let text = strip_inline_markdown(text);
    truncate_to_complete_sentence(text.trim(), MAX_INSIGHT_CHARS)
}

/// Splits a suggestion completion into at most six cleaned items.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| line.trim().chars().count() > MIN_SUGGESTION_LINE_CHARS)
        .take(MAX_SUGGESTIONS)
        .map(|line| {
            let line = list_marker().replace(line.trim(), "");
            let line = strip_inline_markdown(line.trim());
            truncate_to_complete_sentence(line.trim(), MAX_SUGGESTION_CHARS)
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shortens `text` to at most `max_chars` characters, preferring to cut after the last
/// sentence terminator when one falls in the second half; otherwise appends "...".
pub fn truncate_to_complete_sentence(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let truncated = &text[..cut];

    let last_end = truncated
        .char_indices()
        .filter(|(_, c)| matches!(c, '.' | '!' | '?'))
        .map(|(i, _)| i)
        .last();

    if let Some(idx) = last_end {
        let chars_before = truncated[..idx].chars().count();
        if chars_before * 2 > max_chars {
            return truncated[..=idx].to_string();
        }
    }

    format!("{truncated}...")
}
