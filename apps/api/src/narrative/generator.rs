//! Narrative generation: persona prompt → completion → cleanup, with deterministic
//! fallbacks. Never fails: any upstream error is logged and replaced by default copy.

use tracing::{info, warn};

use crate::llm_client::prompts::{INSIGHT_VOICE_INSTRUCTION, SUGGESTION_VOICE_INSTRUCTION};
use crate::llm_client::Completer;
use crate::models::entry::{ResponseRole, SentimentResult};
use crate::narrative::cleanup::{clean_insight, parse_suggestions};
use crate::narrative::defaults::{default_insight, default_suggestions};
use crate::narrative::guidance::{render_guidance, GuidanceBlock, GuidanceSignals};
use crate::narrative::openings::{choose, OpeningPicker};
use crate::narrative::templates::template_for;

/// Entry text is quoted up to this many characters in suggestion prompts.
const EXCERPT_CHARS: usize = 200;
/// Previous entries whose dominant emotion is named in the context line.
const CONTEXT_ENTRIES: usize = 3;
/// A suggestion completion yielding fewer items than this is discarded.
const MIN_SUGGESTIONS: usize = 3;

pub const NEW_JOURNAL_CONTEXT: &str = "This is a new emotional journal.";

/// Inputs for one narrative: the entry, its analysis, and the chosen persona.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    pub entry: &'a str,
    pub analysis: &'a SentimentResult,
    pub is_incident: bool,
    pub role: ResponseRole,
    pub context: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub insight: String,
    pub suggestions: Vec<String>,
}

/// Context line naming the dominant emotions of the most recent previous entries,
/// given oldest first.
pub fn context_line<S: AsRef<str>>(previous_dominant: &[S]) -> String {
    if previous_dominant.is_empty() {
        return NEW_JOURNAL_CONTEXT.to_string();
    }
    let recent = &previous_dominant[previous_dominant.len().saturating_sub(CONTEXT_ENTRIES)..];
    let emotions: Vec<&str> = recent.iter().map(|e| e.as_ref()).collect();
    format!("Previous emotional patterns: {}", emotions.join(", "))
}

fn emotions_text(analysis: &SentimentResult) -> String {
    if analysis.emotions.is_empty() {
        "no strong emotions detected".to_string()
    } else {
        analysis.emotions.join(", ")
    }
}

fn fill(
    template: &str,
    guidance: &[GuidanceBlock],
    req: &NarrativeRequest<'_>,
    opening: &str,
) -> String {
    let excerpt: String = req.entry.chars().take(EXCERPT_CHARS).collect();
    let emotions = emotions_text(req.analysis);
    let intensity = req.analysis.intensity.to_string();
    let entry_lower = req.entry.to_lowercase();
    let guidance = render_guidance(guidance, &GuidanceSignals::new(req.analysis, &entry_lower));
    let values: [(&str, &str); 8] = [
        ("opening", opening),
        ("guidance", &guidance),
        ("entry", req.entry),
        ("entry_excerpt", &excerpt),
        ("emotions", &emotions),
        ("dominant_emotion", &req.analysis.dominant_emotion),
        ("intensity", &intensity),
        ("context", req.context),
    ];
    substitute(template, &values)
}

/// Single-pass `{name}` substitution; substituted text is never rescanned, so
/// braces inside user-written entries survive verbatim.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Full insight prompt for the persona row of `req`.
pub fn build_insight_prompt(req: &NarrativeRequest<'_>, picker: &dyn OpeningPicker) -> String {
    let template = template_for(req.role, req.is_incident);
    let opening = choose(template.openings, picker);
    format!(
        "{}\n\n{}",
        fill(template.insight_prompt, template.insight_guidance, req, opening),
        INSIGHT_VOICE_INSTRUCTION
    )
}

/// Full suggestion prompt for the persona row of `req`.
pub fn build_suggestion_prompt(req: &NarrativeRequest<'_>, picker: &dyn OpeningPicker) -> String {
    let template = template_for(req.role, req.is_incident);
    let opening = choose(template.openings, picker);
    format!(
        "{}\n\n{}",
        fill(template.suggestion_prompt, template.suggestion_guidance, req, opening),
        SUGGESTION_VOICE_INSTRUCTION
    )
}

/// Requests insight and suggestions concurrently and applies fallbacks.
pub async fn generate_narrative(
    completer: &dyn Completer,
    picker: &dyn OpeningPicker,
    req: NarrativeRequest<'_>,
) -> Narrative {
    let insight_prompt = build_insight_prompt(&req, picker);
    let suggestion_prompt = build_suggestion_prompt(&req, picker);

    let (insight_raw, suggestions_raw) = tokio::join!(
        completer.complete(&insight_prompt),
        completer.complete(&suggestion_prompt)
    );

    let dominant = req.analysis.dominant_emotion.as_str();
    let sentiment = req.analysis.sentiment;

    let insight = match insight_raw {
        Ok(raw) => {
            let cleaned = clean_insight(&raw);
            if cleaned.is_empty() {
                warn!("Insight completion was empty after cleanup, using default");
                default_insight(dominant, sentiment, req.is_incident)
            } else {
                cleaned
            }
        }
        Err(e) => {
            warn!("Insight generation failed for role {}: {e}", req.role);
            default_insight(dominant, sentiment, req.is_incident)
        }
    };

    let suggestions = match suggestions_raw {
        Ok(raw) => {
            let parsed = parse_suggestions(&raw);
            if parsed.len() < MIN_SUGGESTIONS {
                warn!(
                    "Only {} suggestions parsed for role {}, using defaults",
                    parsed.len(),
                    req.role
                );
                default_suggestions(dominant, sentiment, req.is_incident)
            } else {
                info!("Parsed {} suggestions for role {}", parsed.len(), req.role);
                parsed
            }
        }
        Err(e) => {
            warn!("Suggestion generation failed for role {}: {e}", req.role);
            default_suggestions(dominant, sentiment, req.is_incident)
        }
    };

    Narrative {
        insight,
        suggestions,
    }
}
