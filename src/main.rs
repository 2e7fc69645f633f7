//! ATC Console CLI entry point

use std::process::ExitCode;

use clap::Parser;

use atc_console::cli::{
    app::{load_merged_config, run_transcribe, run_watch, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, TranscribeOptions, WatchOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use atc_console::domain::config::AppConfig;
use atc_console::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config from args (env var is folded in by clap)
    let cli_config = AppConfig {
        base_url: cli.base_url.clone(),
        ..Default::default()
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Watch { interval }) => {
            let mut cli_config = cli_config;
            cli_config.health_interval = interval;
            let config = load_merged_config(cli_config).await;

            let options = WatchOptions {
                base_url: config.base_url_or_default(),
                health_timeout_secs: config.health_timeout_or_default(),
                interval_secs: config.health_interval_or_default(),
            };

            run_watch(options).await
        }
        None => {
            let Some(audio_path) = cli.audio else {
                presenter.error("No audio file given. Usage: atc-console <AUDIO_FILE>");
                return ExitCode::from(EXIT_USAGE_ERROR);
            };

            let config = load_merged_config(cli_config).await;

            let options = TranscribeOptions {
                audio_path,
                base_url: config.base_url_or_default(),
                transcribe_timeout_secs: config.transcribe_timeout_or_default(),
                health_timeout_secs: config.health_timeout_or_default(),
                json: cli.json,
            };

            run_transcribe(options).await
        }
    }
}
