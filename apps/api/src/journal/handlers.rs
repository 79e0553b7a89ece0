//! Axum route handlers for the Journal API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::trends::{aggregate, journal_stats, JournalStats, TrendSnapshot};
use crate::errors::AppError;
use crate::journal::analyze::{analyze_entry, MAX_PREVIOUS_ENTRIES};
use crate::models::entry::{JournalEntry, ResponseRole, SentimentResult};
use crate::state::AppState;

pub const EMPTY_ENTRY_MESSAGE: &str = "Hey, you gotta write something for me to help you with!";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Only the analysis of a previous entry matters for context.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousEntry {
    #[serde(default, alias = "aiSentiment")]
    pub sentiment_result: SentimentResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisRequest {
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub previous_entries: Vec<PreviousEntry>,
    #[serde(default)]
    pub is_incident: bool,
    #[serde(default)]
    pub response_role: ResponseRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisResponse {
    pub sentiment: SentimentResult,
    pub insight: String,
    pub suggestions: Vec<String>,
    pub is_incident: bool,
    pub response_role: ResponseRole,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEntryRequest {
    #[serde(default, alias = "entry")]
    pub text: Option<String>,
    #[serde(default)]
    pub is_incident: bool,
    #[serde(default)]
    pub response_role: ResponseRole,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub trend: TrendSnapshot,
    pub stats: JournalStats,
}

fn non_empty(text: Option<String>) -> Result<String, AppError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(AppError::Validation(EMPTY_ENTRY_MESSAGE.to_string())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/mood-analysis
///
/// Stateless: detects emotions, classifies sentiment, generates the persona narrative.
pub async fn handle_mood_analysis(
    State(state): State<AppState>,
    payload: Result<Json<MoodAnalysisRequest>, JsonRejection>,
) -> Result<Json<MoodAnalysisResponse>, AppError> {
    let Json(request) = payload?;
    let entry = non_empty(request.entry)?;

    info!(
        "Analyzing mood entry: length={}, incident={}, role={}",
        entry.chars().count(),
        request.is_incident,
        request.response_role
    );

    let previous: Vec<SentimentResult> = request
        .previous_entries
        .into_iter()
        .map(|p| p.sentiment_result)
        .collect();

    let outcome = analyze_entry(
        state.completer.as_ref(),
        state.openings.as_ref(),
        &entry,
        &previous,
        request.is_incident,
        request.response_role,
    )
    .await;

    Ok(Json(MoodAnalysisResponse {
        sentiment: outcome.sentiment,
        insight: outcome.insight,
        suggestions: outcome.suggestions,
        is_incident: request.is_incident,
        response_role: request.response_role,
        timestamp: Utc::now().timestamp_millis(),
    }))
}

/// POST /api/entries
///
/// Save flow: validate → create unanalyzed entry → analyze with the last stored
/// entries as context → attach results → append to the store.
pub async fn handle_save_entry(
    State(state): State<AppState>,
    payload: Result<Json<SaveEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let Json(request) = payload?;
    let text = non_empty(request.text)?;

    let min = state.config.min_entry_chars;
    let len = text.trim().chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "Entry needs at least {min} characters (got {len})"
        )));
    }

    let mut entry = JournalEntry::new(
        text,
        request.is_incident,
        request.response_role,
        Utc::now().timestamp_millis(),
    );

    let history = state.store.load_all().await?;
    let previous: Vec<SentimentResult> = history[history.len().saturating_sub(MAX_PREVIOUS_ENTRIES)..]
        .iter()
        .map(|e| e.sentiment_result.clone())
        .collect();

    let outcome = analyze_entry(
        state.completer.as_ref(),
        state.openings.as_ref(),
        &entry.text,
        &previous,
        entry.is_incident,
        entry.response_role,
    )
    .await;
    entry.attach_analysis(outcome.sentiment, outcome.insight, outcome.suggestions);

    let total = state.store.append(entry.clone()).await?;
    info!("Saved journal entry {} ({} total)", entry.id, total);

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/entries
pub async fn handle_list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    Ok(Json(state.store.load_all().await?))
}

/// GET /api/trends
///
/// Recomputed from the stored history on every call.
pub async fn handle_trends(
    State(state): State<AppState>,
) -> Result<Json<TrendsResponse>, AppError> {
    let history = state.store.load_all().await?;
    let now = Utc::now().timestamp_millis();
    Ok(Json(TrendsResponse {
        trend: aggregate(&history, now),
        stats: journal_stats(&history, now),
    }))
}
