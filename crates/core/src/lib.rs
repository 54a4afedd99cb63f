//! Core library for customer-service call analysis.
//!
//! A recording is decoded to PCM, handed to a pluggable speech-to-text
//! provider, and the resulting transcript is scored for sentiment and
//! keyword coverage. The pipeline's single entry point lives in
//! [`pipeline::analyze_call_use_case`].

pub mod audio;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod shared;
pub mod transcription;
