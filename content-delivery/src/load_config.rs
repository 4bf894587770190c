//! `load_config` module: Loads a static YAML config and applies environment overrides,
//! producing the [`ContentClientConfig`] the CLI hands to the core client.
//!
//! # Responsibilities
//! - Parse the user-supplied YAML file (`account`, optional `base_url` and `locale`)
//! - Apply `CONTENT_DELIVERY_BASE_URL` / `CONTENT_DELIVERY_LOCALE` when set and non-empty
//! - Fail with a clear message naming the file and the read or parse failure
//!
//! # Errors
//! All errors in this module use `anyhow::Error` and are surfaced at the CLI boundary.

use anyhow::Result;
use content_delivery_core::config::ContentClientConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const BASE_URL_ENV: &str = "CONTENT_DELIVERY_BASE_URL";
pub const LOCALE_ENV: &str = "CONTENT_DELIVERY_LOCALE";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ContentClientConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let mut config: ContentClientConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if config.account.trim().is_empty() {
        error!(config_path = ?path_ref, "Config has an empty account");
        anyhow::bail!("Config field `account` must not be empty");
    }

    if let Some(base_url) = env_override(BASE_URL_ENV) {
        info!(base_url = %base_url, "Base URL overridden from environment");
        config.base_url = base_url;
    }
    if let Some(locale) = env_override(LOCALE_ENV) {
        info!(locale = %locale, "Locale overridden from environment");
        config.locale = Some(locale);
    }

    config.trace_loaded();
    Ok(config)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
