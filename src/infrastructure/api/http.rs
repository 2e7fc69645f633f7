//! HTTP backend adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{HealthProbe, ProbeError, TranscribeBackend, TranscribeError};
use crate::domain::config::{DEFAULT_HEALTH_TIMEOUT_SECS, DEFAULT_TRANSCRIBE_TIMEOUT_SECS};
use crate::domain::transcription::{AudioFile, TranscriptionResult};

/// The status string a healthy backend reports
const HEALTHY_STATUS: &str = "healthy";

/// Error body shape used by the backend (FastAPI-style)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

/// Health endpoint response
#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Backend adapter over HTTP.
///
/// Implements both ports against the same origin: multipart upload to
/// `POST /transcribe` and reachability probes to `GET /health`. Timeouts
/// are per request; the audio upload is allowed far longer than a probe.
pub struct HttpBackend {
    base_url: String,
    transcribe_timeout: Duration,
    health_timeout: Duration,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend client with the default timeouts (60 s / 5 s)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(
            base_url,
            Duration::from_secs(DEFAULT_TRANSCRIBE_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS),
        )
    }

    /// Create a backend client with custom timeouts
    pub fn with_timeouts(
        base_url: impl Into<String>,
        transcribe_timeout: Duration,
        health_timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transcribe_timeout,
            health_timeout,
            client: reqwest::Client::new(),
        }
    }

    /// The configured backend origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transcribe_url(&self) -> String {
        format!("{}/transcribe", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Pull the structured detail out of an error body, if there is one
    fn extract_detail(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed.detail.or(parsed.error).filter(|d| !d.trim().is_empty())
    }
}

#[async_trait]
impl TranscribeBackend for HttpBackend {
    async fn transcribe(&self, file: &AudioFile) -> Result<TranscriptionResult, TranscribeError> {
        let part = multipart::Part::bytes(file.data().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type().as_str())
            .map_err(|e| TranscribeError::Transport(e.to_string()))?;
        // Single "audio" field; the boundary is assigned by the client
        let form = multipart::Form::new().part("audio", part);

        let response = self
            .client
            .post(self.transcribe_url())
            .multipart(form)
            .timeout(self.transcribe_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranscribeError::Timeout
                } else {
                    TranscribeError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Some(detail) = Self::extract_detail(&body) {
                return Err(TranscribeError::Rejected(detail));
            }
            return Err(TranscribeError::Transport(format!("HTTP {}", status)));
        }

        response
            .json::<TranscriptionResult>()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))
    }
}

#[async_trait]
impl HealthProbe for HttpBackend {
    async fn check(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(self.health_url())
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::Timeout
                } else {
                    ProbeError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Transport(format!("HTTP {}", status)));
        }

        let body: HealthBody = response
            .json()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        if body.status == HEALTHY_STATUS {
            Ok(())
        } else {
            Err(ProbeError::Unhealthy(body.status))
        }
    }
}
