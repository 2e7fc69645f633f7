//! Transcription request controller tests
//!
//! Drives the controller against a scriptable in-memory backend to pin
//! down the request lifecycle: selection, validation, single-flight
//! submission, and error-to-state conversion.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use atc_console::application::ports::{TranscribeBackend, TranscribeError};
use atc_console::application::TranscriptionController;
use atc_console::domain::transcription::{
    AudioFile, AudioMimeType, Phase, SubmitError, TranscriptionResult,
};

/// Backend stand-in with scripted outcomes and an optional gate that holds
/// a call open until released
struct MockBackend {
    calls: Arc<AtomicUsize>,
    outcomes: Mutex<VecDeque<Result<TranscriptionResult, TranscribeError>>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    fn scripted(
        calls: Arc<AtomicUsize>,
        outcomes: Vec<Result<TranscriptionResult, TranscribeError>>,
    ) -> Self {
        Self {
            calls,
            outcomes: Mutex::new(outcomes.into()),
            gate: None,
        }
    }

    fn gated(
        calls: Arc<AtomicUsize>,
        outcomes: Vec<Result<TranscriptionResult, TranscribeError>>,
        gate: Arc<Notify>,
    ) -> Self {
        Self {
            gate: Some(gate),
            ..Self::scripted(calls, outcomes)
        }
    }
}

#[async_trait]
impl TranscribeBackend for MockBackend {
    async fn transcribe(&self, _file: &AudioFile) -> Result<TranscriptionResult, TranscribeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TranscribeError::Transport("unscripted call".to_string())))
    }
}

/// Let spawned tasks run up to their next suspension point
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn clip(name: &str) -> AudioFile {
    AudioFile::new(name, vec![0x52, 0x49, 0x46, 0x46], AudioMimeType::Wav)
}

fn landing_result() -> TranscriptionResult {
    serde_json::from_value(serde_json::json!({
        "transcript": "clear for landing",
        "intents": {
            "top_intent": "landing_request",
            "intents": {"landing_request": 0.92, "taxi": 0.05}
        },
        "efficiency": {
            "overall_score": 0.8,
            "intent_score": 0.92,
            "clarity_score": 0.75,
            "urgency_score": 0.6,
            "status": "efficient",
            "word_count": 3,
            "char_count": 20
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn repeated_selection_stays_idle_and_keeps_latest_file() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller =
        TranscriptionController::new(MockBackend::scripted(Arc::clone(&calls), vec![]));

    controller.select_file(clip("first.wav"));
    controller.select_file(clip("second.wav"));
    controller.select_file(clip("third.wav"));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.file_name.as_deref(), Some("third.wav"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn submit_without_file_never_touches_network() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller =
        TranscriptionController::new(MockBackend::scripted(Arc::clone(&calls), vec![]));

    let err = controller.submit().await.unwrap_err();
    assert_eq!(err, SubmitError::NoFileSelected);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn second_submit_while_uploading_is_rejected_without_a_second_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let backend = MockBackend::gated(
        Arc::clone(&calls),
        vec![Ok(landing_result())],
        Arc::clone(&gate),
    );
    let controller = Arc::new(TranscriptionController::new(backend));
    controller.select_file(clip("tower.wav"));

    let in_flight = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit().await })
    };
    settle().await;
    assert_eq!(controller.phase(), Phase::Uploading);

    let err = controller.submit().await.unwrap_err();
    assert_eq!(err, SubmitError::UploadInFlight);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    gate.notify_one();
    in_flight.await.unwrap().unwrap();
    assert_eq!(controller.phase(), Phase::Succeeded);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn success_stores_result_mirroring_response() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = TranscriptionController::new(MockBackend::scripted(
        Arc::clone(&calls),
        vec![Ok(landing_result())],
    ));
    controller.select_file(clip("tower.wav"));

    controller.submit().await.unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Succeeded);
    assert_eq!(snapshot.result, Some(landing_result()));
    assert_eq!(snapshot.error_message, None);
}

#[tokio::test]
async fn timeout_fails_with_message_and_resubmission_is_independent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = TranscriptionController::new(MockBackend::scripted(
        Arc::clone(&calls),
        vec![Err(TranscribeError::Timeout), Ok(landing_result())],
    ));
    controller.select_file(clip("tower.wav"));

    controller.submit().await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Failed);
    let message = snapshot.error_message.unwrap();
    assert!(!message.is_empty());
    assert!(snapshot.result.is_none());

    // Same file, no re-selection needed
    controller.submit().await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Succeeded);
    assert!(snapshot.error_message.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rejected_detail_becomes_the_error_message() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = TranscriptionController::new(MockBackend::scripted(
        Arc::clone(&calls),
        vec![Err(TranscribeError::Rejected(
            "Invalid audio file format".to_string(),
        ))],
    ));
    controller.select_file(clip("notes.txt.wav"));

    controller.submit().await.unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Failed);
    assert_eq!(
        snapshot.error_message.as_deref(),
        Some("Invalid audio file format")
    );
}

#[tokio::test]
async fn selecting_during_upload_is_ignored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let backend = MockBackend::gated(
        Arc::clone(&calls),
        vec![Ok(landing_result())],
        Arc::clone(&gate),
    );
    let controller = Arc::new(TranscriptionController::new(backend));
    controller.select_file(clip("tower.wav"));

    let in_flight = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit().await })
    };
    settle().await;

    controller.select_file(clip("other.wav"));
    assert_eq!(
        controller.snapshot().file_name.as_deref(),
        Some("tower.wav")
    );

    gate.notify_one();
    in_flight.await.unwrap().unwrap();
}

#[tokio::test]
async fn render_collaborator_sees_every_phase_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let controller = TranscriptionController::new(MockBackend::scripted(
        Arc::clone(&calls),
        vec![Ok(landing_result())],
    ));

    let phases: Arc<Mutex<Vec<Phase>>> = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&phases);
    controller.set_on_change(Box::new(move |snapshot| {
        observed.lock().unwrap().push(snapshot.phase);
    }));

    controller.select_file(clip("tower.wav"));
    controller.submit().await.unwrap();

    assert_eq!(
        *phases.lock().unwrap(),
        vec![Phase::Idle, Phase::Uploading, Phase::Succeeded]
    );
}
