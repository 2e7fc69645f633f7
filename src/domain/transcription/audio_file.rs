//! Audio file value object

use std::fmt;
use std::path::Path;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Wav,
    Mp3,
    Mpeg,
    Ogg,
    Flac,
    Webm,
    Mp4,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Webm => "audio/webm",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Guess the MIME type from a file extension, if recognized
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "mpeg" | "mpga" => Some(Self::Mpeg),
            "ogg" | "oga" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            "mp4" | "m4a" => Some(Self::Mp4),
            _ => None,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Wav
    }
}

/// Value object representing a user-selected audio file ready for upload.
/// Immutable once a submission begins; the controller clones it for the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct AudioFile {
    name: String,
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioFile {
    /// Create an AudioFile from raw bytes
    pub fn new(name: impl Into<String>, data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self {
            name: name.into(),
            data,
            mime_type,
        }
    }

    /// Create an AudioFile from a path's file name and contents, guessing
    /// the MIME type from the extension
    pub fn from_path_bytes(path: &Path, data: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let mime_type = path
            .extension()
            .and_then(|e| AudioMimeType::from_extension(&e.to_string_lossy()))
            .unwrap_or_default();
        Self::new(name, data, mime_type)
    }

    /// Get the file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
