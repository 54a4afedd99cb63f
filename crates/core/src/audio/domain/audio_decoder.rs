use thiserror::Error;

use super::audio_clip::AudioClip;
use super::waveform::Waveform;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unrecognized or unreadable audio container: {0}")]
    InvalidContainer(String),
    #[error("no audio track found")]
    NoAudioTrack,
    #[error("unsupported audio codec: {0}")]
    UnsupportedCodec(String),
    #[error("audio stream is corrupt: {0}")]
    CorruptStream(String),
    #[error("resampling failed: {0}")]
    Resample(String),
    #[error("audio stream contains no samples")]
    EmptyStream,
}

/// Domain interface for turning a compressed recording into PCM audio.
///
/// Implementations produce mono samples at the pipeline's target sample
/// rate so any transcription backend can consume the result directly.
pub trait AudioDecoder: Send {
    fn decode(&self, clip: &AudioClip) -> Result<Waveform, DecodeError>;
}
