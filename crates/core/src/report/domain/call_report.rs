use std::fmt;

use crate::scoring::domain::keyword_scorer::KeywordScore;
use crate::scoring::domain::sentiment_scorer::SentimentResult;
use crate::transcription::domain::transcript::Transcript;

/// Everything the pipeline learned about one call, ready to present.
#[derive(Debug, Clone, PartialEq)]
pub struct CallReport {
    transcript: Transcript,
    sentiment: SentimentResult,
    keyword_score: KeywordScore,
    composite_score: f64,
}

impl CallReport {
    pub(crate) fn new(
        transcript: Transcript,
        sentiment: SentimentResult,
        keyword_score: KeywordScore,
        composite_score: f64,
    ) -> Self {
        Self {
            transcript,
            sentiment,
            keyword_score,
            composite_score,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn sentiment(&self) -> SentimentResult {
        self.sentiment
    }

    pub fn keyword_score(&self) -> KeywordScore {
        self.keyword_score
    }

    pub fn composite_score(&self) -> f64 {
        self.composite_score
    }
}

impl fmt::Display for CallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transcription: {}", self.transcript.text())?;
        writeln!(
            f,
            "Sentiment score: {:.2} ({})",
            self.sentiment.score(),
            self.sentiment.category()
        )?;
        writeln!(
            f,
            "Keyword match score: {:.2}%",
            self.keyword_score.percentage()
        )?;
        write!(f, "Overall performance score: {:.2}", self.composite_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CallReport {
        CallReport::new(
            Transcript::new("hello thank you please"),
            SentimentResult::new(0.5),
            KeywordScore::new(3, 8),
            87.5,
        )
    }

    #[test]
    fn test_display_renders_all_lines() {
        let rendered = sample_report().to_string();
        assert_eq!(
            rendered,
            "Transcription: hello thank you please\n\
             Sentiment score: 0.50 (Positive)\n\
             Keyword match score: 37.50%\n\
             Overall performance score: 87.50"
        );
    }

    #[test]
    fn test_accessors_expose_components() {
        let report = sample_report();
        assert_eq!(report.transcript().text(), "hello thank you please");
        assert_eq!(report.sentiment().score(), 0.5);
        assert_eq!(report.keyword_score().matched(), 3);
        assert_eq!(report.composite_score(), 87.5);
    }

    #[test]
    fn test_display_handles_empty_transcript() {
        let report = CallReport::new(
            Transcript::new(""),
            SentimentResult::new(0.0),
            KeywordScore::new(0, 8),
            0.0,
        );
        let rendered = report.to_string();
        assert!(rendered.starts_with("Transcription: \n"));
        assert!(rendered.contains("Sentiment score: 0.00 (Neutral)"));
        assert!(rendered.ends_with("Overall performance score: 0.00"));
    }
}
