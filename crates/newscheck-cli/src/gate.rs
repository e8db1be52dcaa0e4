//! Caller-side minimum-length gate.
//!
//! The classifier itself never checks input size; this gate runs before it
//! is invoked. Unit is words (whitespace-split tokens of the raw input),
//! threshold defaults to 50.

pub enum GateDecision {
    Pass,
    Empty,
    TooShort { words: usize, min_words: usize },
}

/// Decide whether `text` is long enough to classify.
pub fn check(text: &str, min_words: usize) -> GateDecision {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return GateDecision::Empty;
    }
    let words = trimmed.split_whitespace().count();
    if words < min_words {
        GateDecision::TooShort { words, min_words }
    } else {
        GateDecision::Pass
    }
}
