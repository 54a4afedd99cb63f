pub mod transcript;
pub mod transcription_provider;
