//! Transcription backend port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{AudioFile, TranscriptionResult};

/// Stable fallback when a failure carries no usable description
pub const GENERIC_TRANSCRIBE_FAILURE: &str = "Failed to transcribe audio";

/// Transcription request errors
#[derive(Debug, Clone, Error)]
pub enum TranscribeError {
    /// The backend rejected the request with a structured detail message
    #[error("{0}")]
    Rejected(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse backend response: {0}")]
    Parse(String),
}

impl TranscribeError {
    /// Derive the user-facing message. Priority: structured detail from the
    /// response body, then the transport-level description, then a generic
    /// fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(detail) if !detail.trim().is_empty() => detail.clone(),
            Self::Timeout => "Request timed out".to_string(),
            Self::Transport(description) | Self::Parse(description)
                if !description.trim().is_empty() =>
            {
                description.clone()
            }
            _ => GENERIC_TRANSCRIBE_FAILURE.to_string(),
        }
    }
}

/// Port for the upload-and-transcribe backend operation
#[async_trait]
pub trait TranscribeBackend: Send + Sync {
    /// Upload an audio file and await its structured analysis.
    ///
    /// # Arguments
    /// * `file` - The audio file to transcribe
    ///
    /// # Returns
    /// The parsed analysis or an error
    async fn transcribe(&self, file: &AudioFile) -> Result<TranscriptionResult, TranscribeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_takes_priority() {
        let err = TranscribeError::Rejected("Invalid audio file format".to_string());
        assert_eq!(err.user_message(), "Invalid audio file format");
    }

    #[test]
    fn transport_description_used_when_present() {
        let err = TranscribeError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn empty_descriptions_fall_back_to_generic() {
        assert_eq!(
            TranscribeError::Rejected("  ".to_string()).user_message(),
            GENERIC_TRANSCRIBE_FAILURE
        );
        assert_eq!(
            TranscribeError::Transport(String::new()).user_message(),
            GENERIC_TRANSCRIBE_FAILURE
        );
    }

    #[test]
    fn timeout_message_is_non_empty() {
        assert!(!TranscribeError::Timeout.user_message().is_empty());
    }
}
