pub mod symphonia_decoder;
pub mod wav_encoder;
