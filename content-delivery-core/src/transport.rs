use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::contract::{Transport, TransportError};

/// [`Transport`] backed by a `reqwest` client rooted at the delivery host.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured client, e.g. one with proxy or timeout settings.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, url: &str) -> Result<Url, TransportError> {
        self.base_url.join(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let url = self.resolve(url)?;
        info!(url = %url, "Fetching content query");

        let response = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = ?e, url = %url, "Content query request failed");
                return Err(TransportError::Request(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "Content delivery API returned error status");
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        debug!(url = %url, bytes = text.len(), "Received content query response");
        serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, url = %url, "Failed to decode content query response");
            TransportError::Decode(e.to_string())
        })
    }
}
