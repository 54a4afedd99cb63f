use std::collections::HashSet;

use crate::transcription::domain::transcript::Transcript;

/// Keyword coverage: how many of the expected phrases were spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScore {
    matched: usize,
    total: usize,
}

impl KeywordScore {
    pub fn new(matched: usize, total: usize) -> Self {
        debug_assert!(matched <= total);
        Self { matched, total }
    }

    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Coverage as a percentage. An empty keyword list scores 0.0, not NaN.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64 * 100.0
        }
    }
}

/// Checks which keywords appear in a transcript.
///
/// Matching is case-insensitive on whole whitespace-separated tokens only.
/// "hell" never matches "hello", and a multi-word keyword never matches at
/// all. Each list entry is checked individually, so duplicated keywords
/// count (and weigh) twice.
pub struct KeywordScorer;

impl KeywordScorer {
    pub fn score(transcript: &Transcript, keywords: &[String]) -> KeywordScore {
        if keywords.is_empty() {
            return KeywordScore::new(0, 0);
        }

        let lowered = transcript.text().to_lowercase();
        let tokens: HashSet<&str> = lowered.split_whitespace().collect();

        let matched = keywords
            .iter()
            .filter(|keyword| tokens.contains(keyword.to_lowercase().as_str()))
            .count();

        KeywordScore::new(matched, keywords.len())
    }
}
