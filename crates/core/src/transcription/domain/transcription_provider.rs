use crate::audio::domain::waveform::Waveform;

/// Result of a speech recognition attempt.
///
/// Failure is part of the value, not an `Err`: callers must branch on the
/// outcome before any scoring happens, and the two failure kinds are kept
/// distinct so the operator can tell "nothing intelligible was said" apart
/// from "the recognizer itself broke".
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionOutcome {
    /// Speech was recognized. The text may be empty for a silent call.
    Recognized(String),
    /// The audio was intelligible to the engine but produced no usable speech.
    Unrecognizable,
    /// The recognizer or the service behind it failed, with a diagnostic.
    ServiceFailure(String),
}

/// Turns decoded audio into text.
pub trait TranscriptionProvider: Send {
    fn transcribe(&self, waveform: &Waveform) -> TranscriptionOutcome;
}
