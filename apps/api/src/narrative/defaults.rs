//! Deterministic fallback copy, served whenever the completion service fails or
//! returns unusable text. Keyed by dominant emotion and incident mode.

use crate::analysis::sentiment::Sentiment;

pub const INCIDENT_INSIGHT: &str = "I can see you're going through something really difficult \
    right now. Your feelings are completely valid, and it's okay to feel overwhelmed. Remember \
    that tough times don't last, but resilient people like you do. You're stronger than you \
    know, and this experience, while painful, can also be a source of growth and wisdom.";

pub const GENERIC_INSIGHT: &str = "Thank you for sharing your thoughts and feelings. \
    Self-reflection is a powerful tool for personal growth and emotional well-being.";

const INCIDENT_SUGGESTIONS: &[&str] = &[
    "Practice deep breathing exercises to help manage immediate stress",
    "Reach out to a trusted friend or family member for support",
    "Write down your thoughts to help process what happened",
    "Consider speaking with a counselor or therapist",
    "Engage in gentle physical activity like walking or stretching",
];

const GENERIC_SUGGESTIONS: &[&str] = &[
    "Take a moment to acknowledge your feelings",
    "Practice self-compassion and be gentle with yourself",
    "Consider what small step you could take to feel better",
    "Remember that all emotions are temporary and will pass",
];

/// Default insight. `_sentiment` is accepted so callers pass the full analysis;
/// the copy itself only varies by emotion and incident mode.
pub fn default_insight(dominant_emotion: &str, _sentiment: Sentiment, is_incident: bool) -> String {
    if is_incident {
        return INCIDENT_INSIGHT.to_string();
    }

    let insight = match dominant_emotion {
        "happy" => "It's wonderful to see you experiencing joy! These positive moments are precious \
            and worth celebrating. Your happiness radiates and can inspire others around you.",
        "sad" => "I can sense the heaviness you're carrying. It's okay to feel sad - these emotions \
            are part of being human. Allow yourself to feel, but also remember that this feeling will pass.",
        "angry" => "Your anger is telling you that something important to you has been affected. \
            While these feelings are valid, try to channel this energy constructively.",
        "anxious" => "I understand that uncertainty can be overwhelming. Your anxiety shows that you \
            care deeply about outcomes. Take things one step at a time.",
        "stressed" => "The pressure you're feeling is real, and it's understandable. Remember to be \
            kind to yourself and take breaks when needed.",
        "calm" => "There's something beautiful about the peace you're experiencing. This inner calm \
            is a strength that can help you navigate life's challenges.",
        "grateful" => "Your gratitude is a powerful force that attracts more positive experiences. \
            This appreciation you feel enriches not just your life, but others' too.",
        _ => GENERIC_INSIGHT,
    };
    insight.to_string()
}

/// Default suggestion list (4–5 items).
pub fn default_suggestions(
    dominant_emotion: &str,
    _sentiment: Sentiment,
    is_incident: bool,
) -> Vec<String> {
    let list: &[&str] = if is_incident {
        INCIDENT_SUGGESTIONS
    } else {
        match dominant_emotion {
            "happy" => &[
                "Share your joy with loved ones - happiness multiplies when shared",
                "Practice gratitude by writing down what made you happy today",
                "Use this positive energy to tackle something you've been putting off",
                "Create a memory of this moment through photos or journaling",
            ],
            "sad" => &[
                "Allow yourself to feel the sadness without judgment",
                "Reach out to a friend or family member for comfort",
                "Engage in a self-care activity that brings you peace",
                "Consider what this sadness might be teaching you",
            ],
            "angry" => &[
                "Take some deep breaths before responding to the situation",
                "Go for a walk or do some physical exercise to release tension",
                "Write down your feelings to gain clarity on what's bothering you",
                "Consider addressing the issue constructively when you're calmer",
            ],
            "anxious" => &[
                "Practice grounding techniques like the 5-4-3-2-1 method",
                "Break down overwhelming tasks into smaller, manageable steps",
                "Try progressive muscle relaxation or meditation",
                "Limit caffeine and focus on getting good sleep",
            ],
            _ => GENERIC_SUGGESTIONS,
        }
    };
    list.iter().map(|s| s.to_string()).collect()
}
