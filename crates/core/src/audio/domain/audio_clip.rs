use std::io;
use std::path::Path;

/// Source container format of a recording, as tagged at upload time.
///
/// The tag is a decoding hint only; `Unknown` leaves the decoder to sniff
/// the container from the byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Flac,
    Ogg,
    M4a,
    Unknown,
}

impl AudioFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Self::Unknown,
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "mp3" => Self::Mp3,
            "wav" => Self::Wav,
            "flac" => Self::Flac,
            "ogg" | "oga" => Self::Ogg,
            "m4a" | "mp4" => Self::M4a,
            _ => Self::Unknown,
        }
    }

    /// Extension string usable as a container probe hint.
    pub fn extension_hint(&self) -> Option<&'static str> {
        match self {
            Self::Mp3 => Some("mp3"),
            Self::Wav => Some("wav"),
            Self::Flac => Some("flac"),
            Self::Ogg => Some("ogg"),
            Self::M4a => Some("m4a"),
            Self::Unknown => None,
        }
    }
}

/// A raw uploaded recording: undecoded container bytes plus a format tag.
///
/// Exists for a single pipeline run and is dropped when the run ends.
#[derive(Clone, Debug)]
pub struct AudioClip {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Read a clip from disk, tagging the format from the file extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::new(data, AudioFormat::from_path(path)))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }
}
