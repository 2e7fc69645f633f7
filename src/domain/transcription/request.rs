//! Transcription request state machine

use std::fmt;
use thiserror::Error;

use super::{AudioFile, TranscriptionResult};

/// Request lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl Phase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Uploading => "uploading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when a submission cannot begin
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// No file has been selected yet; nothing was sent to the network
    #[error("No audio file selected")]
    NoFileSelected,

    /// An upload is already in flight for this request
    #[error("An upload is already in progress")]
    UploadInFlight,
}

/// Terminal outcome storage. Encoding the payloads in the state keeps the
/// "exactly one of result/error, only in its phase" invariant structural.
#[derive(Debug, Clone, Default)]
enum RequestState {
    #[default]
    Idle,
    Uploading,
    Succeeded(TranscriptionResult),
    Failed(String),
}

/// One user-initiated transcription attempt.
///
/// State machine:
///   IDLE -> UPLOADING (begin_upload, requires a selected file)
///   UPLOADING -> SUCCEEDED (complete)
///   UPLOADING -> FAILED (fail)
///   SUCCEEDED | FAILED -> UPLOADING (begin_upload, re-submission)
///   SUCCEEDED | FAILED -> IDLE (select_file, discards the old outcome)
#[derive(Debug, Default)]
pub struct TranscriptionRequest {
    file: Option<AudioFile>,
    state: RequestState,
}

impl TranscriptionRequest {
    /// Create a new request with no file selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        match self.state {
            RequestState::Idle => Phase::Idle,
            RequestState::Uploading => Phase::Uploading,
            RequestState::Succeeded(_) => Phase::Succeeded,
            RequestState::Failed(_) => Phase::Failed,
        }
    }

    /// Check if an upload is in flight
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, RequestState::Uploading)
    }

    /// The currently selected file, if any
    pub fn file(&self) -> Option<&AudioFile> {
        self.file.as_ref()
    }

    /// The parsed result; present only in the succeeded phase
    pub fn result(&self) -> Option<&TranscriptionResult> {
        match &self.state {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The failure message; present only in the failed phase
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Record the candidate file. A no-op while an upload is in flight;
    /// otherwise discards any prior terminal outcome and returns to idle.
    pub fn select_file(&mut self, file: AudioFile) {
        if self.is_uploading() {
            return;
        }
        self.file = Some(file);
        self.state = RequestState::Idle;
    }

    /// Transition into UPLOADING, handing back a copy of the selected file
    /// for the network call. The stored file stays untouched so a failed
    /// attempt can be re-submitted as-is.
    pub fn begin_upload(&mut self) -> Result<AudioFile, SubmitError> {
        if self.is_uploading() {
            return Err(SubmitError::UploadInFlight);
        }
        let file = self.file.clone().ok_or(SubmitError::NoFileSelected)?;
        self.state = RequestState::Uploading;
        Ok(file)
    }

    /// Transition from UPLOADING to SUCCEEDED with the parsed result
    pub fn complete(&mut self, result: TranscriptionResult) {
        self.state = RequestState::Succeeded(result);
    }

    /// Transition from UPLOADING to FAILED with a human-readable message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = RequestState::Failed(message.into());
    }
}
