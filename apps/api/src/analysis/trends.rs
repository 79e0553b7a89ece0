//! Trend aggregation over journal history.
//!
//! Pure function of `(history, now)`: the recent window is the last 7 entries,
//! the this-week window is the subset of it stamped within the last 7 days.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::emoji_for;
use crate::analysis::sentiment::Sentiment;
use crate::models::entry::JournalEntry;

pub const RECENT_WINDOW: usize = 7;
pub const MAX_RECOMMENDATIONS: usize = 3;
pub const MAX_TOP_EMOTIONS: usize = 3;

/// Minimum this-week entries before the weekly trend is computed.
const MIN_TREND_ENTRIES: usize = 3;
/// Mean intensity shift between halves needed to call a trend.
const TREND_THRESHOLD: f64 = 1.0;
/// Frequency an emotion must exceed to trigger its recommendation.
const FREQUENCY_THRESHOLD: u32 = 2;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;

pub const MORE_POSITIVE_INSIGHT: &str = "You've been experiencing more positive emotions recently!";
pub const MORE_NEGATIVE_INSIGHT: &str = "You've been having some challenging times lately.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    Improving,
    Declining,
    #[default]
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: u32,
    pub emoji: String,
}

/// Derived view over the entry history. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    pub weekly_trend: WeeklyTrend,
    pub emotion_frequency: BTreeMap<String, u32>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub monthly_comparison: String,
    pub top_emotions: Vec<EmotionCount>,
}

/// Whole-history counters shown next to the trend view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total_entries: usize,
    pub incident_entries: usize,
    pub entries_this_month: usize,
}

/// A recommendation rule, evaluated in declaration order.
struct RecommendationRule {
    applies: fn(&BTreeMap<String, u32>, WeeklyTrend) -> bool,
    text: &'static str,
}

fn frequency_exceeds(freq: &BTreeMap<String, u32>, emotion: &str) -> bool {
    freq.get(emotion).copied().unwrap_or(0) > FREQUENCY_THRESHOLD
}

const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |freq, _| frequency_exceeds(freq, "stressed"),
        text: "Consider stress management techniques like deep breathing or meditation",
    },
    RecommendationRule {
        applies: |freq, _| frequency_exceeds(freq, "anxious"),
        text: "Try grounding exercises: name 5 things you can see, 4 you can touch, etc.",
    },
    RecommendationRule {
        applies: |freq, _| frequency_exceeds(freq, "sad"),
        text: "Reach out to friends or family, or engage in activities you enjoy",
    },
    RecommendationRule {
        applies: |_, trend| trend == WeeklyTrend::Declining,
        text: "Your mood seems to be declining. Consider talking to someone or practicing self-care",
    },
    RecommendationRule {
        applies: |_, trend| trend == WeeklyTrend::Improving,
        text: "Great progress! Keep doing what you're doing",
    },
];

/// Computes the trend snapshot for `history` (oldest first) as of `now_ms`.
pub fn aggregate(history: &[JournalEntry], now_ms: i64) -> TrendSnapshot {
    let recent = &history[history.len().saturating_sub(RECENT_WINDOW)..];

    // insertion-ordered counts drive the top-emotions tie-break
    let mut ordered_counts: Vec<(String, u32)> = Vec::new();
    for entry in recent {
        for emotion in &entry.sentiment_result.emotions {
            match ordered_counts.iter_mut().find(|(e, _)| e == emotion) {
                Some((_, count)) => *count += 1,
                None => ordered_counts.push((emotion.clone(), 1)),
            }
        }
    }
    let emotion_frequency: BTreeMap<String, u32> = ordered_counts.iter().cloned().collect();

    let weekly_trend = weekly_trend(recent, now_ms);

    TrendSnapshot {
        weekly_trend,
        insights: sentiment_insights(recent),
        recommendations: recommendations(&emotion_frequency, weekly_trend),
        monthly_comparison: format!("{} entries this month", entries_since(history, now_ms - MONTH_MS)),
        top_emotions: top_emotions(ordered_counts),
        emotion_frequency,
    }
}

/// Whole-history counters as of `now_ms`.
pub fn journal_stats(history: &[JournalEntry], now_ms: i64) -> JournalStats {
    JournalStats {
        total_entries: history.len(),
        incident_entries: history.iter().filter(|e| e.is_incident).count(),
        entries_this_month: entries_since(history, now_ms - MONTH_MS),
    }
}

fn entries_since(history: &[JournalEntry], cutoff_ms: i64) -> usize {
    history.iter().filter(|e| e.timestamp >= cutoff_ms).count()
}

fn sentiment_insights(recent: &[JournalEntry]) -> Vec<String> {
    let count = |s: Sentiment| {
        recent
            .iter()
            .filter(|e| e.sentiment_result.sentiment == s)
            .count()
    };
    let positive = count(Sentiment::Positive);
    let negative = count(Sentiment::Negative);

    if positive > negative {
        vec![MORE_POSITIVE_INSIGHT.to_string()]
    } else if negative > positive {
        vec![MORE_NEGATIVE_INSIGHT.to_string()]
    } else {
        vec![]
    }
}

/// Compares mean intensity of the older and newer halves of the this-week window.
fn weekly_trend(recent: &[JournalEntry], now_ms: i64) -> WeeklyTrend {
    let week_ago = now_ms - WEEK_MS;
    let this_week: Vec<f64> = recent
        .iter()
        .filter(|e| e.timestamp >= week_ago)
        .map(|e| f64::from(e.sentiment_result.intensity))
        .collect();

    if this_week.len() < MIN_TREND_ENTRIES {
        return WeeklyTrend::Stable;
    }

    let split = this_week.len().div_ceil(2);
    let (first, second) = this_week.split_at(split);
    let mean = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
    let (first_avg, second_avg) = (mean(first), mean(second));

    if second_avg > first_avg + TREND_THRESHOLD {
        WeeklyTrend::Improving
    } else if second_avg < first_avg - TREND_THRESHOLD {
        WeeklyTrend::Declining
    } else {
        WeeklyTrend::Stable
    }
}

/// Applies every matching rule in order, keeping the first three.
pub fn recommendations(freq: &BTreeMap<String, u32>, trend: WeeklyTrend) -> Vec<String> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(freq, trend))
        .take(MAX_RECOMMENDATIONS)
        .map(|rule| rule.text.to_string())
        .collect()
}

fn top_emotions(mut ordered_counts: Vec<(String, u32)>) -> Vec<EmotionCount> {
    // stable sort keeps first-seen order among equal counts
    ordered_counts.sort_by(|a, b| b.1.cmp(&a.1));
    ordered_counts
        .into_iter()
        .take(MAX_TOP_EMOTIONS)
        .map(|(emotion, count)| EmotionCount {
            emoji: emoji_for(&emotion).to_string(),
            emotion,
            count,
        })
        .collect()
}
