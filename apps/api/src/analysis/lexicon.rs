//! Emotion lexicon: the fixed label → trigger-phrase table the detector scores against.
//!
//! Definition order is part of the contract: the detector reports emotions in this
//! order and breaks dominant-emotion ties in favour of the earlier label.

/// Label reported when no lexicon emotion is detected.
pub const NEUTRAL: &str = "neutral";

/// One lexicon row: an emotion label and the phrases that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub emotion: &'static str,
    pub keywords: &'static [&'static str],
}

/// The emotion lexicon, in definition order.
pub const EMOTION_LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        emotion: "happy",
        keywords: &[
            "happy", "joy", "joyful", "excited", "cheerful", "delighted", "pleased", "content",
        ],
    },
    LexiconEntry {
        emotion: "sad",
        keywords: &[
            "sad", "depressed", "down", "unhappy", "melancholy", "blue", "dejected",
        ],
    },
    LexiconEntry {
        emotion: "angry",
        keywords: &[
            "angry", "mad", "furious", "irritated", "annoyed", "frustrated", "rage",
        ],
    },
    LexiconEntry {
        emotion: "anxious",
        keywords: &[
            "anxious", "worried", "nervous", "scared", "fearful", "panic", "stress",
        ],
    },
    LexiconEntry {
        emotion: "stressed",
        keywords: &[
            "stressed", "overwhelmed", "pressure", "burden", "tension", "strain",
        ],
    },
    LexiconEntry {
        emotion: "calm",
        keywords: &["calm", "peaceful", "relaxed", "serene", "tranquil", "composed"],
    },
    LexiconEntry {
        emotion: "excited",
        keywords: &["excited", "thrilled", "enthusiastic", "eager", "pumped"],
    },
    LexiconEntry {
        emotion: "grateful",
        keywords: &["grateful", "thankful", "appreciative", "blessed", "thankfulness"],
    },
    LexiconEntry {
        emotion: "lonely",
        keywords: &["lonely", "isolated", "alone", "disconnected", "solitary"],
    },
    LexiconEntry {
        emotion: "confident",
        keywords: &["confident", "sure", "certain", "self-assured", "empowered"],
    },
    LexiconEntry {
        emotion: "overwhelmed",
        keywords: &["overwhelmed", "swamped", "buried", "drowning", "too much"],
    },
    LexiconEntry {
        emotion: "peaceful",
        keywords: &["peaceful", "serene", "tranquil", "zen", "mindful"],
    },
    LexiconEntry {
        emotion: "hopeful",
        keywords: &[
            "hopeful", "optimistic", "positive", "looking forward", "expecting",
        ],
    },
    LexiconEntry {
        emotion: "tired",
        keywords: &["tired", "exhausted", "drained", "weary", "fatigue"],
    },
    LexiconEntry {
        emotion: "energetic",
        keywords: &["energetic", "active", "vigorous", "lively", "dynamic"],
    },
];

/// Phrases that, placed directly before a matched keyword, earn the intensifier bonus.
pub const INTENSIFIERS: &[&str] = &["very ", "really "];

/// Display emoji for an emotion label. Unknown labels get a neutral face.
pub fn emoji_for(emotion: &str) -> &'static str {
    match emotion.to_lowercase().as_str() {
        "happy" => "😊",
        "sad" => "😢",
        "angry" => "😠",
        "anxious" => "😰",
        "stressed" => "😫",
        "calm" | "content" => "😌",
        "excited" => "🤩",
        "frustrated" => "😤",
        "grateful" => "🙏",
        "lonely" => "😞",
        "confident" => "💪",
        "overwhelmed" => "🤯",
        "peaceful" => "☮️",
        "hopeful" => "🌟",
        "tired" => "😴",
        "energetic" => "⚡",
        _ => "😐",
    }
}
