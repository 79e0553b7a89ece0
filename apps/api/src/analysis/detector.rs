//! Emotion detection: additive keyword scoring against the lexicon.
//!
//! Algorithm:
//! 1. Lower-case the text once.
//! 2. For each lexicon emotion, every keyword contained in the text adds 1; if the
//!    keyword also appears directly after an intensifier ("very ", "really ") it adds 2 more.
//! 3. Emotions scoring 0 are dropped; the rest are reported in lexicon order.
//! 4. Dominant = strictly highest score, earliest lexicon label on ties.
//! 5. Intensity = max score, +1 at 4+ distinct emotions, +1 more at 6+, clamped to [1, 10].

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{EMOTION_LEXICON, INTENSIFIERS, NEUTRAL};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

const INTENSIFIER_BONUS: u32 = 2;
const BREADTH_STEP_ONE: usize = 4;
const BREADTH_STEP_TWO: usize = 6;

/// Per-emotion score for one text, in lexicon order. Every score is ≥ 1.
pub type EmotionScores = Vec<(&'static str, u32)>;

/// Detector output, before sentiment classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionDetection {
    pub emotions: Vec<String>,
    pub dominant_emotion: String,
    pub intensity: u8,
}

/// Scores `text` against every lexicon emotion. Zero-score emotions are omitted.
pub fn score_emotions(text: &str) -> EmotionScores {
    let lower = text.to_lowercase();

    EMOTION_LEXICON
        .iter()
        .filter_map(|entry| {
            let score: u32 = entry
                .keywords
                .iter()
                .map(|kw| keyword_score(&lower, kw))
                .sum();
            (score > 0).then_some((entry.emotion, score))
        })
        .collect()
}

/// 0 if the keyword is absent, 1 if present, 3 if also intensified.
fn keyword_score(lower_text: &str, keyword: &str) -> u32 {
    if !lower_text.contains(keyword) {
        return 0;
    }
    let intensified = INTENSIFIERS
        .iter()
        .any(|prefix| lower_text.contains(&format!("{prefix}{keyword}")));
    if intensified {
        1 + INTENSIFIER_BONUS
    } else {
        1
    }
}

/// Detects emotions in free text. Total: never fails, neutral on no match.
pub fn detect(text: &str) -> EmotionDetection {
    let scores = score_emotions(text);

    let mut dominant: Option<(&str, u32)> = None;
    for &(emotion, score) in &scores {
        match dominant {
            Some((_, best)) if score <= best => {}
            _ => dominant = Some((emotion, score)),
        }
    }

    EmotionDetection {
        emotions: scores.iter().map(|(e, _)| e.to_string()).collect(),
        dominant_emotion: dominant.map_or(NEUTRAL, |(e, _)| e).to_string(),
        intensity: intensity_from_scores(&scores),
    }
}

fn intensity_from_scores(scores: &EmotionScores) -> u8 {
    let mut raw = scores
        .iter()
        .map(|&(_, s)| s)
        .max()
        .unwrap_or(0)
        .max(MIN_INTENSITY as u32);

    if scores.len() >= BREADTH_STEP_ONE {
        raw += 1;
    }
    if scores.len() >= BREADTH_STEP_TWO {
        raw += 1;
    }

    raw.clamp(MIN_INTENSITY as u32, MAX_INTENSITY as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_neutral() {
        let d = detect("The meeting is scheduled for noon.");
        assert!(d.emotions.is_empty());
        assert_eq!(d.dominant_emotion, "neutral");
        assert_eq!(d.intensity, 1);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let d = detect("");
        assert!(d.emotions.is_empty());
        assert_eq!(d.dominant_emotion, "neutral");
        assert_eq!(d.intensity, 1);
    }

    #[test]
    fn test_single_keyword_scores_one() {
        let scores = score_emotions("I feel calm today.");
        assert_eq!(scores, vec![("calm", 1)]);

        let d = detect("I feel calm today.");
        assert_eq!(d.emotions, vec!["calm"]);
        assert_eq!(d.dominant_emotion, "calm");
        assert_eq!(d.intensity, 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(score_emotions("So GRATEFUL for this"), vec![("grateful", 1)]);
    }

    #[test]
    fn test_intensifier_adds_two() {
        assert_eq!(score_emotions("I am very sad"), vec![("sad", 3)]);
        assert_eq!(score_emotions("I am really sad"), vec![("sad", 3)]);
    }

    #[test]
    fn test_standalone_repeat_does_not_double_count() {
        // the same keyword counts once even when it also appears bare
        assert_eq!(score_emotions("very sad, just sad"), vec![("sad", 3)]);
    }

    #[test]
    fn test_intensifier_requires_adjacency() {
        assert_eq!(score_emotions("very much sad"), vec![("sad", 1)]);
    }

    #[test]
    fn test_emotions_in_lexicon_order_not_score_order() {
        // anxious scores 3, happy scores 1; happy is defined first
        let d = detect("happy yet really anxious");
        assert_eq!(d.emotions, vec!["happy", "anxious"]);
        assert_eq!(d.dominant_emotion, "anxious");
        assert_eq!(d.intensity, 3);
    }

    #[test]
    fn test_tie_goes_to_earlier_lexicon_label() {
        let d = detect("I am happy but also sad.");
        assert_eq!(d.emotions, vec!["happy", "sad"]);
        assert_eq!(d.dominant_emotion, "happy");
    }

    #[test]
    fn test_four_emotions_bump_intensity() {
        let d = detect("happy sad angry anxious");
        assert_eq!(d.emotions.len(), 4);
        assert_eq!(d.intensity, 2);
    }

    #[test]
    fn test_six_emotions_bump_intensity_twice() {
        let d = detect("happy sad angry anxious calm tired");
        assert_eq!(d.emotions.len(), 6);
        assert_eq!(d.intensity, 3);
    }

    #[test]
    fn test_intensity_clamped_to_ten() {
        let text = "very happy, very joy, very cheerful, very delighted, very pleased, \
                    very sad, very angry, very anxious, very calm, very tired, very lonely";
        let d = detect(text);
        assert!(d.emotions.len() >= 6);
        assert_eq!(d.intensity, MAX_INTENSITY);
    }

    #[test]
    fn test_multiword_keyword() {
        let d = detect("There is simply too much on my plate");
        assert!(d.emotions.contains(&"overwhelmed".to_string()));
    }

    #[test]
    fn test_very_sad_really_anxious_scenario() {
        let d = detect("I am very sad and really anxious about tomorrow");
        let scores = score_emotions("I am very sad and really anxious about tomorrow");
        assert!(scores.contains(&("sad", 3)));
        assert!(scores.contains(&("anxious", 3)));
        assert_eq!(d.dominant_emotion, "sad");
        assert_eq!(d.intensity, 3);
    }
}
