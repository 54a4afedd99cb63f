use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::audio_decoder::{AudioDecoder, DecodeError};
use crate::audio::domain::waveform::Waveform;
use crate::shared::constants::TARGET_SAMPLE_RATE;

/// Decodes compressed recordings (MP3, WAV, FLAC, Ogg, M4A) with symphonia.
///
/// Multi-channel audio is downmixed to mono by per-frame averaging and the
/// result is resampled to the pipeline's target rate. Everything happens
/// in memory: clip bytes in, waveform out, no temporary files.
pub struct SymphoniaDecoder {
    target_sample_rate: u32,
}

impl SymphoniaDecoder {
    pub fn new() -> Self {
        Self {
            target_sample_rate: TARGET_SAMPLE_RATE,
        }
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode(&self, clip: &AudioClip) -> Result<Waveform, DecodeError> {
        let cursor = Cursor::new(clip.data().to_vec());
        let stream = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = clip.format().extension_hint() {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| DecodeError::InvalidContainer(e.to_string()))?;

        let mut format = probed.format;

        let track = format.default_track().ok_or(DecodeError::NoAudioTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let source_rate = codec_params
            .sample_rate
            .ok_or_else(|| DecodeError::InvalidContainer("sample rate not declared".to_string()))?;
        let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| DecodeError::UnsupportedCodec(e.to_string()))?;

        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => return Err(DecodeError::CorruptStream(e.to_string())),
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    log::warn!("skipping corrupt audio frame: {e}");
                    continue;
                }
                Err(e) => return Err(DecodeError::CorruptStream(e.to_string())),
            };

            let spec = *decoded.spec();
            let frames = decoded.frames();
            if frames == 0 {
                continue;
            }

            let mut buffer = SampleBuffer::<f32>::new(frames as u64, spec);
            buffer.copy_interleaved_ref(decoded);
            push_mono(buffer.samples(), channels, &mut samples);
        }

        if samples.is_empty() {
            return Err(DecodeError::EmptyStream);
        }

        if source_rate != self.target_sample_rate {
            samples = resample(&samples, source_rate, self.target_sample_rate)?;
        }

        log::debug!(
            "decoded {} samples ({:.1}s) at {} Hz mono",
            samples.len(),
            samples.len() as f64 / self.target_sample_rate as f64,
            self.target_sample_rate
        );

        Ok(Waveform::new(samples, self.target_sample_rate, 1))
    }
}

/// Downmix interleaved frames to mono by averaging across channels.
fn push_mono(interleaved: &[f32], channels: usize, out: &mut Vec<f32>) {
    if channels <= 1 {
        out.extend_from_slice(interleaved);
        return;
    }
    for frame in interleaved.chunks(channels) {
        out.push(frame.iter().sum::<f32>() / channels as f32);
    }
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, DecodeError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let chunk_size = 1024;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, chunk_size, 1)
        .map_err(|e| DecodeError::Resample(format!("init: {e}")))?;

    let mut output = Vec::with_capacity((samples.len() as f64 * ratio) as usize + chunk_size);

    for chunk in samples.chunks(chunk_size) {
        // The final chunk is zero-padded up to the fixed input size.
        let input = if chunk.len() < chunk_size {
            let mut padded = chunk.to_vec();
            padded.resize(chunk_size, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let resampled = resampler
            .process(&[input], None)
            .map_err(|e| DecodeError::Resample(e.to_string()))?;

        if let Some(channel) = resampled.first() {
            output.extend_from_slice(channel);
        }
    }

    let expected_len = (samples.len() as f64 * ratio) as usize;
    output.truncate(expected_len);

    Ok(output)
}
