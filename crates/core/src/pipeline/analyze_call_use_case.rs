use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::audio_decoder::{AudioDecoder, DecodeError};
use crate::report::domain::call_report::CallReport;
use crate::report::domain::report_assembler::ReportAssembler;
use crate::scoring::domain::keyword_scorer::KeywordScorer;
use crate::scoring::domain::sentiment_scorer::SentimentScorer;
use crate::transcription::domain::transcript::Transcript;
use crate::transcription::domain::transcription_provider::{
    TranscriptionOutcome, TranscriptionProvider,
};

/// Reasons a call cannot be scored.
///
/// Unrecognizable and Service are terminal transcription outcomes; the
/// scorers never run for them. An empty recognized transcript is not an
/// error and scores normally.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("audio could not be understood")]
    Unrecognizable,
    #[error("speech recognition service error: {0}")]
    Service(String),
}

/// One-shot pipeline: decode a recording, transcribe it, score it.
pub struct AnalyzeCallUseCase {
    decoder: Box<dyn AudioDecoder>,
    provider: Box<dyn TranscriptionProvider>,
    sentiment_scorer: SentimentScorer,
    keywords: Vec<String>,
}

impl AnalyzeCallUseCase {
    pub fn new(
        decoder: Box<dyn AudioDecoder>,
        provider: Box<dyn TranscriptionProvider>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            decoder,
            provider,
            sentiment_scorer: SentimentScorer::new(),
            keywords,
        }
    }

    pub fn run(&self, clip: &AudioClip) -> Result<CallReport, AnalysisError> {
        // 1. Decode the recording to mono PCM at the recognizer's rate
        let waveform = self.decoder.decode(clip)?;
        log::debug!(
            "decoded clip: {:.1}s at {} Hz",
            waveform.duration(),
            waveform.sample_rate()
        );

        // 2. Transcribe; both failure outcomes stop the pipeline here
        let transcript = match self.provider.transcribe(&waveform) {
            TranscriptionOutcome::Recognized(text) => Transcript::new(text),
            TranscriptionOutcome::Unrecognizable => return Err(AnalysisError::Unrecognizable),
            TranscriptionOutcome::ServiceFailure(diagnostic) => {
                return Err(AnalysisError::Service(diagnostic));
            }
        };
        log::info!("transcribed {} characters", transcript.text().len());

        // 3. Score both dimensions and assemble the report
        let sentiment = self.sentiment_scorer.score(&transcript);
        let keyword_score = KeywordScorer::score(&transcript, &self.keywords);

        Ok(ReportAssembler::assemble(transcript, sentiment, keyword_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_clip::AudioFormat;
    use crate::audio::domain::waveform::Waveform;
    use crate::scoring::domain::sentiment_scorer::SentimentCategory;
    use approx::assert_relative_eq;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct StubDecoder {
        waveform: Option<Waveform>,
    }

    impl AudioDecoder for StubDecoder {
        fn decode(&self, _: &AudioClip) -> Result<Waveform, DecodeError> {
            self.waveform.clone().ok_or(DecodeError::EmptyStream)
        }
    }

    struct StubProvider {
        outcome: TranscriptionOutcome,
        called: Arc<Mutex<bool>>,
    }

    impl StubProvider {
        fn new(outcome: TranscriptionOutcome) -> Self {
            Self {
                outcome,
                called: Arc::new(Mutex::new(false)),
            }
        }
    }

    impl TranscriptionProvider for StubProvider {
        fn transcribe(&self, _: &Waveform) -> TranscriptionOutcome {
            *self.called.lock().unwrap() = true;
            self.outcome.clone()
        }
    }

    fn silent_waveform() -> Waveform {
        Waveform::new(vec![0.0; 16000], 16000, 1)
    }

    fn sample_clip() -> AudioClip {
        AudioClip::new(vec![0u8; 4], AudioFormat::Wav)
    }

    fn default_keywords() -> Vec<String> {
        ["hello", "thank", "help", "please", "good", "bye", "resolved", "welcome"]
            .iter()
            .map(|k| k.to_string())
            .collect()
    }

    #[test]
    fn test_recognized_call_is_scored() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::Recognized(
                "hello thank you please".to_string(),
            ))),
            default_keywords(),
        );

        let report = uc.run(&sample_clip()).unwrap();
        assert_eq!(report.transcript().text(), "hello thank you please");
        assert_eq!(report.keyword_score().matched(), 3);
        assert_eq!(report.keyword_score().total(), 8);
        assert_relative_eq!(report.keyword_score().percentage(), 37.5);
        // "thank" is the only weighted word in the transcript.
        assert_relative_eq!(report.sentiment().score(), 0.4);
        assert_relative_eq!(report.composite_score(), 77.5);
    }

    #[test]
    fn test_empty_transcript_scores_zero_but_succeeds() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::Recognized(
                String::new(),
            ))),
            default_keywords(),
        );

        let report = uc.run(&sample_clip()).unwrap();
        assert_eq!(report.transcript().text(), "");
        assert_eq!(report.sentiment().score(), 0.0);
        assert_eq!(report.sentiment().category(), SentimentCategory::Neutral);
        assert_eq!(report.keyword_score().matched(), 0);
        assert_relative_eq!(report.composite_score(), 0.0);
    }

    #[test]
    fn test_unrecognizable_audio_stops_before_scoring() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::Unrecognizable)),
            default_keywords(),
        );

        let result = uc.run(&sample_clip());
        assert!(matches!(result, Err(AnalysisError::Unrecognizable)));
    }

    #[test]
    fn test_service_failure_preserves_diagnostic() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::ServiceFailure(
                "quota exceeded".to_string(),
            ))),
            default_keywords(),
        );

        let err = uc.run(&sample_clip()).unwrap_err();
        assert!(matches!(err, AnalysisError::Service(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_decode_failure_skips_transcription() {
        let provider = StubProvider::new(TranscriptionOutcome::Recognized("hi".to_string()));
        let called = provider.called.clone();
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder { waveform: None }),
            Box::new(provider),
            default_keywords(),
        );

        let result = uc.run(&sample_clip());
        assert!(matches!(result, Err(AnalysisError::Decode(_))));
        assert!(!*called.lock().unwrap());
    }

    #[test]
    fn test_run_is_deterministic() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::Recognized(
                "good help resolved".to_string(),
            ))),
            default_keywords(),
        );

        let first = uc.run(&sample_clip()).unwrap();
        let second = uc.run(&sample_clip()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_keyword_list_scores_zero_coverage() {
        let uc = AnalyzeCallUseCase::new(
            Box::new(StubDecoder {
                waveform: Some(silent_waveform()),
            }),
            Box::new(StubProvider::new(TranscriptionOutcome::Recognized(
                "hello thank you".to_string(),
            ))),
            Vec::new(),
        );

        let report = uc.run(&sample_clip()).unwrap();
        assert_eq!(report.keyword_score().total(), 0);
        assert_eq!(report.keyword_score().percentage(), 0.0);
    }
}
