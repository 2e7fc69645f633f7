//! Transcription domain module

mod audio_file;
mod request;
mod result;

pub use audio_file::{AudioFile, AudioMimeType};
pub use request::{Phase, SubmitError, TranscriptionRequest};
pub use result::{EfficiencyMetrics, IntentScores, TranscriptionResult};
