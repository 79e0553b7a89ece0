// Deterministic emotion analysis: lexicon scoring, polarity, trend aggregation.
// Pure functions only; safe to call from any task without locking.

pub mod detector;
pub mod lexicon;
pub mod sentiment;
pub mod trends;

use crate::models::entry::SentimentResult;

/// Runs detection then classification on one text.
pub fn analyze_text(text: &str) -> SentimentResult {
    let detection = detector::detect(text);
    let polarity = sentiment::classify(&detection.emotions);
    SentimentResult::from_detection(detection, polarity)
}
