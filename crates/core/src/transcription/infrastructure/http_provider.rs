use reqwest::blocking::multipart;

use crate::audio::domain::waveform::Waveform;
use crate::audio::infrastructure::wav_encoder;
use crate::shared::constants::DEFAULT_TRANSCRIPTION_MODEL;
use crate::transcription::domain::transcription_provider::{
    TranscriptionOutcome, TranscriptionProvider,
};

/// Remote speech recognition against an OpenAI-compatible endpoint.
///
/// The waveform is re-encoded as WAV and posted as a multipart upload to
/// `{base_url}/audio/transcriptions` with `response_format=text`. Network,
/// authentication and server errors all surface as
/// [`TranscriptionOutcome::ServiceFailure`] with the diagnostic attached.
pub struct HttpTranscriptionProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpTranscriptionProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TranscriptionProvider for HttpTranscriptionProvider {
    fn transcribe(&self, waveform: &Waveform) -> TranscriptionOutcome {
        let wav = match wav_encoder::encode(waveform) {
            Ok(wav) => wav,
            Err(e) => return TranscriptionOutcome::ServiceFailure(format!("wav encoding: {e}")),
        };

        let part = match multipart::Part::bytes(wav)
            .file_name("audio.wav")
            .mime_str("audio/wav")
        {
            Ok(part) => part,
            Err(e) => return TranscriptionOutcome::ServiceFailure(format!("mime: {e}")),
        };

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", part);

        let url = format!("{}/audio/transcriptions", self.base_url);
        log::debug!("posting {:.1}s of audio to {url}", waveform.duration());

        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
        {
            Ok(response) => response,
            Err(e) => return TranscriptionOutcome::ServiceFailure(format!("request: {e}")),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return TranscriptionOutcome::ServiceFailure(format!(
                "status {status}: {}",
                body.trim()
            ));
        }

        match response.text() {
            Ok(body) => outcome_from_body(&body),
            Err(e) => TranscriptionOutcome::ServiceFailure(format!("body: {e}")),
        }
    }
}

fn outcome_from_body(body: &str) -> TranscriptionOutcome {
    let text = body.trim();
    if text.is_empty() {
        TranscriptionOutcome::Unrecognizable
    } else {
        TranscriptionOutcome::Recognized(text.to_string())
    }
}
