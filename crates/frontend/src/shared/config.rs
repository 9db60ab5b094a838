//! Runtime configuration loading.

use crate::shared::api_utils::asset_url;
use contracts::shared::config::{AppConfig, CONFIG_OVERRIDE_PATH};
use gloo_net::http::Request;

/// Load the configuration override, falling back to the compiled-in default.
///
/// A missing override file is the normal case and is logged at `info`.
pub async fn load_app_config() -> AppConfig {
    match fetch_override().await {
        Ok(Some(config)) => {
            log::info!("Loaded configuration from {}", CONFIG_OVERRIDE_PATH);
            config
        }
        Ok(None) => {
            log::info!("Using default embedded configuration");
            AppConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_OVERRIDE_PATH, e);
            AppConfig::default()
        }
    }
}

async fn fetch_override() -> anyhow::Result<Option<AppConfig>> {
    let response = Request::get(&asset_url(CONFIG_OVERRIDE_PATH))
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        anyhow::bail!("unexpected status {}", response.status());
    }

    let body = response
        .text()
        .await
        .map_err(|e| anyhow::anyhow!("failed to read body: {}", e))?;
    AppConfig::from_toml_str(&body).map(Some)
}

/// Apply the configured log level
pub fn apply_log_level(config: &AppConfig) {
    match log_level_filter(&config.logging.level) {
        Some(level) => log::set_max_level(level),
        None => log::warn!("Unknown log level '{}'", config.logging.level),
    }
}

fn log_level_filter(name: &str) -> Option<log::LevelFilter> {
    name.trim().parse().ok()
}
