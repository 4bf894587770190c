use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Host serving the content delivery API when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://c1.adis.ws";

/// Connection settings for the content delivery API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentClientConfig {
    /// Account (store) whose published content is queried.
    pub account: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Locale sent with every query. Omitted from the URL when `None`.
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ContentClientConfig {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            base_url: default_base_url(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn trace_loaded(&self) {
        info!(
            account = %self.account,
            base_url = %self.base_url,
            locale = self.locale.as_deref().unwrap_or("<none>"),
            "Loaded ContentClientConfig"
        );
        debug!(?self, "ContentClientConfig loaded (full debug)");
    }
}
