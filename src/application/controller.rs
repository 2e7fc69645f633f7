//! Transcription request controller use case

use std::sync::Mutex;

use crate::domain::transcription::{
    AudioFile, Phase, SubmitError, TranscriptionRequest, TranscriptionResult,
};

use super::ports::TranscribeBackend;

/// Read-only view of the request state, handed to render collaborators
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub phase: Phase,
    pub file_name: Option<String>,
    pub file_size: Option<String>,
    pub result: Option<TranscriptionResult>,
    pub error_message: Option<String>,
}

/// Called after every state change with the fresh snapshot
pub type RequestCallback = Box<dyn Fn(&RequestSnapshot) + Send + Sync>;

/// Owns the lifecycle of one in-flight upload-and-transcribe operation.
///
/// At most one upload may be in flight per controller; a second `submit`
/// while uploading is rejected without touching the network. Network
/// failures are converted to request state, never propagated to callers.
pub struct TranscriptionController<B: TranscribeBackend> {
    backend: B,
    request: Mutex<TranscriptionRequest>,
    on_change: Mutex<Option<RequestCallback>>,
}

impl<B: TranscribeBackend> TranscriptionController<B> {
    /// Create a controller over the given backend, starting idle
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            request: Mutex::new(TranscriptionRequest::new()),
            on_change: Mutex::new(None),
        }
    }

    /// Register the render collaborator. Replaces any previous callback.
    pub fn set_on_change(&self, callback: RequestCallback) {
        *self.on_change.lock().unwrap() = Some(callback);
    }

    /// Record the candidate file. Silently ignored while an upload is in
    /// flight; otherwise discards any prior terminal outcome.
    pub fn select_file(&self, file: AudioFile) {
        {
            let mut request = self.request.lock().unwrap();
            if request.is_uploading() {
                return;
            }
            request.select_file(file);
        }
        self.notify();
    }

    /// Submit the selected file for transcription and await the outcome.
    ///
    /// Returns `Err(SubmitError::NoFileSelected)` when nothing is selected
    /// and `Err(SubmitError::UploadInFlight)` when already uploading; in
    /// both cases no network call is made. The transcription outcome itself
    /// is reported through the request state, not the return value.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let file = self.request.lock().unwrap().begin_upload()?;
        self.notify();

        let outcome = self.backend.transcribe(&file).await;

        {
            let mut request = self.request.lock().unwrap();
            match outcome {
                Ok(result) => request.complete(result),
                Err(err) => request.fail(err.user_message()),
            }
        }
        self.notify();
        Ok(())
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.request.lock().unwrap().phase()
    }

    /// Clone out the full current state
    pub fn snapshot(&self) -> RequestSnapshot {
        let request = self.request.lock().unwrap();
        RequestSnapshot {
            phase: request.phase(),
            file_name: request.file().map(|f| f.name().to_string()),
            file_size: request.file().map(|f| f.human_readable_size()),
            result: request.result().cloned(),
            error_message: request.error_message().map(str::to_string),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        if let Some(callback) = self.on_change.lock().unwrap().as_ref() {
            callback(&snapshot);
        }
    }
}
