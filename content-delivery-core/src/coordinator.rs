//! Single-item lookup: query URL → one GET → mapper → typed item.
//!
//! [`GetContentItem`] is generic over the [`Transport`] so tests can drive it
//! with `MockTransport` and canned responses.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::ContentClientConfig;
use crate::contract::{ContentError, Transport};
use crate::mapper;
use crate::model::ContentItem;
use crate::query::{build_url, iri_predicate, Predicate};

pub struct GetContentItem<T> {
    config: ContentClientConfig,
    transport: T,
}

impl<T> GetContentItem<T>
where
    T: Transport,
{
    pub fn new(config: ContentClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ContentClientConfig {
        &self.config
    }

    /// Relative query URL for `predicate` in the configured account and locale.
    pub fn url(&self, predicate: &Predicate) -> String {
        build_url(
            predicate,
            &self.config.account,
            self.config.locale.as_deref(),
        )
    }

    /// Upgrade and inline every result of a raw query response.
    pub fn process_response(&self, raw: &Value) -> Result<Vec<Value>, ContentError> {
        mapper::map_response(raw)
    }

    /// Fetch the content item with the given delivery id.
    ///
    /// Fails with [`ContentError::NotFound`] when the query matches nothing.
    /// Only the first match is returned.
    pub async fn get_content_item(&self, id: &str) -> Result<ContentItem, ContentError> {
        let url = self.url(&iri_predicate(id));
        info!(id, account = %self.config.account, "Looking up content item");

        let raw = self.transport.get_json(&url).await.map_err(|e| {
            error!(id, error = %e, "Content item request failed");
            ContentError::from(e)
        })?;

        let items = self.process_response(&raw).map_err(|e| {
            error!(id, error = %e, "Failed to map content query response");
            e
        })?;
        info!(id, results = items.len(), "Mapped content query response");

        match items.into_iter().next() {
            Some(body) => ContentItem::from_mapped(body),
            None => {
                warn!(id, "Content item not found");
                Err(ContentError::NotFound { id: id.to_string() })
            }
        }
    }
}
