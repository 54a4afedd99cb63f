pub mod http_provider;
pub mod whisper_provider;
