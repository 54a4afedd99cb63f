use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::waveform::Waveform;
use crate::transcription::domain::transcription_provider::{
    TranscriptionOutcome, TranscriptionProvider,
};

/// Local speech recognition using whisper.cpp via whisper-rs.
///
/// Runs the Whisper tiny.en model entirely on the local machine; no audio
/// leaves the process. Engine failures are folded into
/// [`TranscriptionOutcome::ServiceFailure`] so the caller sees one outcome
/// type regardless of provider.
#[derive(Debug)]
pub struct WhisperProvider {
    model_path: PathBuf,
}

impl WhisperProvider {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl TranscriptionProvider for WhisperProvider {
    fn transcribe(&self, waveform: &Waveform) -> TranscriptionOutcome {
        let path = match self.model_path.to_str() {
            Some(path) => path,
            None => {
                return TranscriptionOutcome::ServiceFailure("invalid model path".to_string());
            }
        };

        let ctx = match WhisperContext::new_with_params(path, WhisperContextParameters::default())
        {
            Ok(ctx) => ctx,
            Err(e) => {
                return TranscriptionOutcome::ServiceFailure(format!(
                    "failed to load Whisper model: {e}"
                ));
            }
        };

        let mut state = match ctx.create_state() {
            Ok(state) => state,
            Err(e) => {
                return TranscriptionOutcome::ServiceFailure(format!(
                    "failed to create Whisper state: {e}"
                ));
            }
        };

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some("en"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        if let Err(e) = state.full(params, waveform.samples()) {
            return TranscriptionOutcome::ServiceFailure(format!("Whisper inference failed: {e}"));
        }

        let mut text = String::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };

                let piece = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens (start with [, like [_BEG_], [_SOT_], etc.)
                let trimmed = piece.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                // Tokens carry their own leading spaces; keep them.
                text.push_str(piece);
            }
        }

        let text = text.trim().to_string();
        if text.is_empty() {
            TranscriptionOutcome::Unrecognizable
        } else {
            TranscriptionOutcome::Recognized(text)
        }
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
