use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::detector::EmotionDetection;
use crate::analysis::lexicon::NEUTRAL;
use crate::analysis::sentiment::Sentiment;

/// Insight attached to an entry whose analysis never completed.
pub const UNANALYZED_INSIGHT: &str = "Thanks for sharing your thoughts. Reflecting on your \
    feelings is an important step in emotional wellness.";

/// Intensity carried by the placeholder result of an unanalyzed entry.
const UNANALYZED_INTENSITY: u8 = 5;

/// Detector + classifier output attached to a journal entry.
///
/// `dominant_emotion` is a member of `emotions` unless `emotions` is empty,
/// in which case it is `"neutral"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default = "neutral_label")]
    pub dominant_emotion: String,
    #[serde(default = "unanalyzed_intensity")]
    pub intensity: u8,
    #[serde(default)]
    pub sentiment: Sentiment,
}

fn neutral_label() -> String {
    NEUTRAL.to_string()
}

fn unanalyzed_intensity() -> u8 {
    UNANALYZED_INTENSITY
}

impl SentimentResult {
    pub fn from_detection(detection: EmotionDetection, sentiment: Sentiment) -> Self {
        Self {
            emotions: detection.emotions,
            dominant_emotion: detection.dominant_emotion,
            intensity: detection.intensity,
            sentiment,
        }
    }

    /// Placeholder for an entry saved without a completed analysis.
    pub fn unanalyzed() -> Self {
        Self {
            emotions: vec![],
            dominant_emotion: neutral_label(),
            intensity: UNANALYZED_INTENSITY,
            sentiment: Sentiment::Neutral,
        }
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::unanalyzed()
    }
}

/// Narrative persona. Selects prompt tone only; never affects emotion analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ResponseRole {
    Mom,
    Dad,
    Sibling,
    #[default]
    CloseFriend,
    Lover,
    Counselor,
    SupportiveFriend,
}

impl ResponseRole {
    pub const ALL: [ResponseRole; 7] = [
        ResponseRole::Mom,
        ResponseRole::Dad,
        ResponseRole::Sibling,
        ResponseRole::CloseFriend,
        ResponseRole::Lover,
        ResponseRole::Counselor,
        ResponseRole::SupportiveFriend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseRole::Mom => "mom",
            ResponseRole::Dad => "dad",
            ResponseRole::Sibling => "sibling",
            ResponseRole::CloseFriend => "close_friend",
            ResponseRole::Lover => "lover",
            ResponseRole::Counselor => "counselor",
            ResponseRole::SupportiveFriend => "supportive_friend",
        }
    }

    /// Parses a role label. `"brother"` is the legacy name for `sibling`;
    /// anything unrecognised falls back to `supportive_friend`. A missing field is
    /// `close_friend` via `Default`; an explicit `null` counts as unrecognised.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "mom" => ResponseRole::Mom,
            "dad" => ResponseRole::Dad,
            "sibling" | "brother" => ResponseRole::Sibling,
            "close_friend" => ResponseRole::CloseFriend,
            "lover" => ResponseRole::Lover,
            "counselor" => ResponseRole::Counselor,
            _ => ResponseRole::SupportiveFriend,
        }
    }
}

impl From<Option<String>> for ResponseRole {
    fn from(label: Option<String>) -> Self {
        label.map_or(ResponseRole::SupportiveFriend, |l| ResponseRole::from_label(&l))
    }
}

impl From<ResponseRole> for String {
    fn from(role: ResponseRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for ResponseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One journaling submission.
///
/// Created unanalyzed, then analysis results attach exactly once.
/// Field aliases accept the browser blob written by earlier clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(alias = "entry")]
    pub text: String,
    #[serde(default)]
    pub is_incident: bool,
    #[serde(default)]
    pub response_role: ResponseRole,
    #[serde(default, alias = "aiSentiment")]
    pub sentiment_result: SentimentResult,
    #[serde(default, alias = "aiInsight")]
    pub narrative_insight: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Older clients keyed entries by their numeric creation time.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

impl JournalEntry {
    pub fn new(text: String, is_incident: bool, response_role: ResponseRole, timestamp: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            text,
            is_incident,
            response_role,
            sentiment_result: SentimentResult::unanalyzed(),
            narrative_insight: UNANALYZED_INSIGHT.to_string(),
            suggestions: vec![],
        }
    }

    /// Attaches the analysis outcome. Text, id and timestamp stay untouched.
    pub fn attach_analysis(
        &mut self,
        sentiment: SentimentResult,
        insight: String,
        suggestions: Vec<String>,
    ) {
        self.sentiment_result = sentiment;
        self.narrative_insight = insight;
        self.suggestions = suggestions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_as_snake_case() {
        for role in ResponseRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: ResponseRole = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_brother_is_sibling() {
        let role: ResponseRole = serde_json::from_str("\"brother\"").unwrap();
        assert_eq!(role, ResponseRole::Sibling);
    }

    #[test]
    fn test_unknown_role_falls_back_to_supportive_friend() {
        let role: ResponseRole = serde_json::from_str("\"astronaut\"").unwrap();
        assert_eq!(role, ResponseRole::SupportiveFriend);
    }

    #[test]
    fn test_null_role_falls_back_to_supportive_friend() {
        let role: ResponseRole = serde_json::from_str("null").unwrap();
        assert_eq!(role, ResponseRole::SupportiveFriend);

        let json = r#"{"id": "a", "entry": "hi", "timestamp": 1, "responseRole": null}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.response_role, ResponseRole::SupportiveFriend);
    }

    #[test]
    fn test_default_role_is_close_friend() {
        assert_eq!(ResponseRole::default(), ResponseRole::CloseFriend);
    }

    #[test]
    fn test_new_entry_is_unanalyzed() {
        let entry = JournalEntry::new("hello".into(), false, ResponseRole::Mom, 1_000);
        assert_eq!(entry.sentiment_result.dominant_emotion, "neutral");
        assert_eq!(entry.sentiment_result.intensity, 5);
        assert_eq!(entry.narrative_insight, UNANALYZED_INSIGHT);
        assert!(entry.suggestions.is_empty());
    }

    #[test]
    fn test_reads_legacy_browser_blob() {
        let json = r#"{
            "id": "1718000000000",
            "date": "2024-06-10",
            "entry": "Feeling calm after a long walk",
            "isIncident": false,
            "responseRole": "brother",
            "aiSentiment": {
                "emotions": ["calm"],
                "dominantEmotion": "calm",
                "intensity": 1,
                "sentiment": "positive"
            },
            "aiInsight": "Nice.",
            "suggestions": ["Walk again tomorrow"],
            "timestamp": 1718000000000
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.text, "Feeling calm after a long walk");
        assert_eq!(entry.response_role, ResponseRole::Sibling);
        assert_eq!(entry.sentiment_result.sentiment, Sentiment::Positive);
        assert_eq!(entry.narrative_insight, "Nice.");
    }

    #[test]
    fn test_numeric_legacy_id_becomes_text() {
        let json = r#"{"id": 1718000000000, "entry": "old entry", "timestamp": 1718000000000}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1718000000000");
        assert_eq!(entry.response_role, ResponseRole::CloseFriend);
    }

    #[test]
    fn test_serializes_camel_case() {
        let entry = JournalEntry::new("x".into(), true, ResponseRole::Lover, 42);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["isIncident"], true);
        assert_eq!(value["responseRole"], "lover");
        assert_eq!(value["sentimentResult"]["dominantEmotion"], "neutral");
    }
}
