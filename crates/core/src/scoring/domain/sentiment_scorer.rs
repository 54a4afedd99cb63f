use std::collections::{HashMap, HashSet};
use std::fmt;

use super::sentiment_lexicon::{NEGATORS, WEIGHTED_WORDS};
use crate::transcription::domain::transcript::Transcript;

/// Polarity bucket derived from a sentiment score.
///
/// The boundaries are strict: only an exact 0.0 is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        write!(f, "{label}")
    }
}

/// A sentiment score in [-1.0, 1.0] with its polarity bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    score: f64,
    category: SentimentCategory,
}

impl SentimentResult {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            category: SentimentCategory::from_score(score),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn category(&self) -> SentimentCategory {
        self.category
    }
}

/// Lexicon-based sentiment scorer.
///
/// Each recognized word contributes its lexicon weight; a word directly
/// preceded by a negator contributes its weight flipped and halved. The
/// final score is the mean over contributing words only, so filler words
/// never dilute the polarity. Text with no lexicon hits scores exactly 0.0.
pub struct SentimentScorer {
    weights: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            weights: WEIGHTED_WORDS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    pub fn score(&self, transcript: &Transcript) -> SentimentResult {
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut previous: Option<String> = None;

        for raw in transcript.text().split_whitespace() {
            let word = normalize_word(raw);
            if let Some(weight) = self.weights.get(word.as_str()) {
                let negated = previous
                    .as_deref()
                    .is_some_and(|prev| self.negators.contains(prev));
                total += if negated { weight * -0.5 } else { *weight };
                scored += 1;
            }
            previous = Some(word);
        }

        let score = if scored == 0 { 0.0 } else { total / scored as f64 };
        debug_assert!((-1.0..=1.0).contains(&score));
        SentimentResult::new(score)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip surrounding punctuation and lowercase, keeping inner apostrophes
/// so contractions like "didn't" survive.
fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .trim_matches('\'')
        .to_lowercase()
}
