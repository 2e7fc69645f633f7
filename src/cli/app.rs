//! Main app runners

use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::{ConfigStore, HealthProbe};
use crate::application::{HealthMonitor, TranscriptionController};
use crate::domain::config::{AppConfig, DEFAULT_TRANSCRIBE_TIMEOUT_SECS};
use crate::domain::transcription::{AudioFile, Phase};
use crate::infrastructure::{HttpBackend, XdgConfigStore};

use super::args::{TranscribeOptions, WatchOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration: defaults < file < CLI/env
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run a one-shot upload-and-transcribe
pub async fn run_transcribe(options: TranscribeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let bytes = match tokio::fs::read(&options.audio_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            presenter.error(&format!(
                "Failed to read audio file {}: {}",
                options.audio_path.display(),
                e
            ));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let file = AudioFile::from_path_bytes(&options.audio_path, bytes);
    presenter.render_file_info(file.name(), &file.human_readable_size());

    let backend = HttpBackend::with_timeouts(
        options.base_url.as_str(),
        Duration::from_secs(options.transcribe_timeout_secs),
        Duration::from_secs(options.health_timeout_secs),
    );

    // Pre-flight reachability check; advisory only, the upload decides
    match backend.check().await {
        Ok(()) => presenter.success("Backend connected"),
        Err(_) => presenter.warn(&format!(
            "Backend disconnected - please ensure the backend server is running on {}",
            options.base_url
        )),
    }

    let controller = TranscriptionController::new(backend);
    controller.select_file(file);

    let snapshot = controller.snapshot();
    presenter.start_spinner(&format!(
        "Transcribing {}...",
        snapshot.file_name.as_deref().unwrap_or("audio")
    ));

    if let Err(e) = controller.submit().await {
        presenter.spinner_fail(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let snapshot = controller.snapshot();
    match snapshot.phase {
        Phase::Succeeded => {
            presenter.spinner_success("Transcription complete");
            let Some(result) = snapshot.result else {
                presenter.error("Backend returned no result");
                return ExitCode::from(EXIT_ERROR);
            };
            if options.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => presenter.output(&json),
                    Err(e) => {
                        presenter.error(&format!("Failed to encode result: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            } else {
                presenter.render_result(&result);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        _ => {
            let message = snapshot
                .error_message
                .unwrap_or_else(|| "Failed to transcribe audio".to_string());
            presenter.spinner_fail("Transcription failed");
            presenter.error(&message);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the health monitor until Ctrl-C
pub async fn run_watch(options: WatchOptions) -> ExitCode {
    let presenter = Presenter::new();
    presenter.info(&format!(
        "Monitoring {} every {}s (press Ctrl-C to stop)",
        options.base_url, options.interval_secs
    ));

    let backend = HttpBackend::with_timeouts(
        options.base_url.as_str(),
        Duration::from_secs(DEFAULT_TRANSCRIBE_TIMEOUT_SECS),
        Duration::from_secs(options.health_timeout_secs),
    );

    let monitor = HealthMonitor::new(backend, Duration::from_secs(options.interval_secs));
    let base_url = options.base_url.clone();
    let render = Presenter::new();
    monitor.set_on_change(Box::new(move |status| {
        render.render_health(status, &base_url);
    }));
    monitor.start();

    if let Err(e) = tokio::signal::ctrl_c().await {
        presenter.error(&format!("Failed to listen for Ctrl-C: {}", e));
        monitor.stop();
        return ExitCode::from(EXIT_ERROR);
    }

    monitor.stop();
    presenter.info("Monitor stopped");
    ExitCode::from(EXIT_SUCCESS)
}
