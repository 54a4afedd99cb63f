pub const WHISPER_MODEL_NAME: &str = "ggml-tiny.en.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.en.bin";

/// Whisper models are trained on 16 kHz audio; all decoding targets this rate.
pub const TARGET_SAMPLE_RATE: u32 = 16000;

pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://api.openai.com/v1";

/// Phrases an agent is expected to say on every call.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "hello", "thank", "help", "please", "good", "bye", "resolved", "welcome",
];
