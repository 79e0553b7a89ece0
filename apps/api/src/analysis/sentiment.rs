use serde::{Deserialize, Serialize};

/// Overall polarity of a set of detected emotions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

const POSITIVE_EMOTIONS: &[&str] = &[
    "happy",
    "excited",
    "grateful",
    "confident",
    "peaceful",
    "hopeful",
    "energetic",
    "calm",
];

const NEGATIVE_EMOTIONS: &[&str] = &[
    "sad",
    "angry",
    "anxious",
    "stressed",
    "lonely",
    "overwhelmed",
    "tired",
];

/// Classifies a set of emotion labels by counting membership in the positive and
/// negative partitions. Labels in neither partition are ignored; ties are neutral.
pub fn classify<S: AsRef<str>>(emotions: &[S]) -> Sentiment {
    let count_in = |partition: &[&str]| {
        emotions
            .iter()
            .filter(|e| partition.contains(&e.as_ref()))
            .count()
    };

    let positive = count_in(POSITIVE_EMOTIONS);
    let negative = count_in(NEGATIVE_EMOTIONS);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
