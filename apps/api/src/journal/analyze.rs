//! Analysis pipeline shared by the stateless endpoint and the save flow.
//!
//! Flow: detect → classify → persona narrative (with fallbacks). Never fails.

use tracing::info;

use crate::analysis::analyze_text;
use crate::llm_client::Completer;
use crate::models::entry::{ResponseRole, SentimentResult};
use crate::narrative::generator::{context_line, generate_narrative, NarrativeRequest};
use crate::narrative::openings::OpeningPicker;

/// At most this many previous entries are considered for context.
pub const MAX_PREVIOUS_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub sentiment: SentimentResult,
    pub insight: String,
    pub suggestions: Vec<String>,
}

/// Analyzes one entry. `previous` holds earlier analyses, oldest first.
pub async fn analyze_entry(
    completer: &dyn Completer,
    picker: &dyn OpeningPicker,
    text: &str,
    previous: &[SentimentResult],
    is_incident: bool,
    role: ResponseRole,
) -> AnalysisOutcome {
    let sentiment = analyze_text(text);
    info!(
        "Detected emotions {:?} (dominant={}, intensity={}, sentiment={:?})",
        sentiment.emotions, sentiment.dominant_emotion, sentiment.intensity, sentiment.sentiment
    );

    let previous = &previous[previous.len().saturating_sub(MAX_PREVIOUS_ENTRIES)..];
    let dominant: Vec<&str> = previous
        .iter()
        .map(|p| p.dominant_emotion.as_str())
        .collect();
    let context = context_line(&dominant);

    let narrative = generate_narrative(
        completer,
        picker,
        NarrativeRequest {
            entry: text,
            analysis: &sentiment,
            is_incident,
            role,
            context: &context,
        },
    )
    .await;

    AnalysisOutcome {
        sentiment,
        insight: narrative.insight,
        suggestions: narrative.suggestions,
    }
}
