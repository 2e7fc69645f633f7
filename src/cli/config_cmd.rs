//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "base_url" => config.base_url = Some(value.trim_end_matches('/').to_string()),
        "transcribe_timeout" => config.transcribe_timeout = Some(parse_secs(key, value)?),
        "health_timeout" => config.health_timeout = Some(parse_secs(key, value)?),
        "health_interval" => config.health_interval = Some(parse_secs(key, value)?),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "base_url" => config.base_url,
        "transcribe_timeout" => config.transcribe_timeout.map(|v| v.to_string()),
        "health_timeout" => config.health_timeout.map(|v| v.to_string()),
        "health_interval" => config.health_interval.map(|v| v.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "base_url",
        config.base_url.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "transcribe_timeout",
        &config
            .transcribe_timeout
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "health_timeout",
        &config
            .health_timeout
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "health_interval",
        &config
            .health_interval
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "base_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be an http:// or https:// origin".to_string(),
                });
            }
        }
        "transcribe_timeout" | "health_timeout" | "health_interval" => {
            parse_secs(key, value)?;
        }
        _ => {}
    }
    Ok(())
}

fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    let secs: u64 = value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a whole number of seconds".to_string(),
    })?;
    if secs == 0 {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be at least 1 second".to_string(),
        });
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_requires_http_scheme() {
        assert!(validate_config_value("base_url", "http://localhost:8000").is_ok());
        assert!(validate_config_value("base_url", "https://tower.local").is_ok());
        assert!(validate_config_value("base_url", "localhost:8000").is_err());
    }

    #[test]
    fn seconds_must_be_positive_integers() {
        assert_eq!(parse_secs("health_interval", "10").unwrap(), 10);
        assert!(parse_secs("health_interval", "0").is_err());
        assert!(parse_secs("health_interval", "ten").is_err());
        assert!(parse_secs("health_interval", "-5").is_err());
    }
}
