use super::call_report::CallReport;
use crate::scoring::domain::keyword_scorer::KeywordScore;
use crate::scoring::domain::sentiment_scorer::SentimentResult;
use crate::transcription::domain::transcript::Transcript;

/// Combines the per-dimension scores into the final report.
///
/// The composite is `sentiment * 100 + keyword percentage`, deliberately
/// unclamped: a fully positive call with full keyword coverage scores 200,
/// and a hostile call can go negative. The two dimensions stay readable in
/// the sum because each occupies its own 100-point band.
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        transcript: Transcript,
        sentiment: SentimentResult,
        keyword_score: KeywordScore,
    ) -> CallReport {
        let composite = sentiment.score() * 100.0 + keyword_score.percentage();
        CallReport::new(transcript, sentiment, keyword_score, composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::best_case(1.0, 8, 8, 200.0)]
    #[case::worst_case(-1.0, 0, 8, -100.0)]
    #[case::mixed(0.5, 3, 8, 87.5)]
    #[case::neutral_silent(0.0, 0, 8, 0.0)]
    #[case::no_keywords(0.25, 0, 0, 25.0)]
    fn test_composite_is_unclamped_sum(
        #[case] sentiment_score: f64,
        #[case] matched: usize,
        #[case] total: usize,
        #[case] expected: f64,
    ) {
        let report = ReportAssembler::assemble(
            Transcript::new("irrelevant"),
            SentimentResult::new(sentiment_score),
            KeywordScore::new(matched, total),
        );
        assert_relative_eq!(report.composite_score(), expected);
    }

    #[test]
    fn test_assemble_preserves_components() {
        let report = ReportAssembler::assemble(
            Transcript::new("hello"),
            SentimentResult::new(0.6),
            KeywordScore::new(1, 8),
        );
        assert_eq!(report.transcript().text(), "hello");
        assert_eq!(report.sentiment().score(), 0.6);
        assert_eq!(report.keyword_score().matched(), 1);
        assert_eq!(report.keyword_score().total(), 8);
    }
}
