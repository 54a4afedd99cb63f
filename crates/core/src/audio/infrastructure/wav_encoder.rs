use std::io::Cursor;

use crate::audio::domain::waveform::Waveform;

/// Serializes a waveform as a 16-bit PCM WAV file in memory.
///
/// Remote transcription endpoints take a file upload, so the decoded
/// samples are re-encoded into the most widely accepted container.
pub fn encode(waveform: &Waveform) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: waveform.channels(),
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for sample in waveform.samples() {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(value)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}
