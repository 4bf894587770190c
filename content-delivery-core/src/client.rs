use crate::config::ContentClientConfig;
use crate::contract::{ContentError, Transport};
use crate::coordinator::GetContentItem;
use crate::model::ContentItem;
use crate::query::iri_predicate;
use crate::transport::HttpTransport;

/// Entry point for callers: looks up published content items by delivery id.
pub struct ContentClient<T = HttpTransport> {
    get_content_item: GetContentItem<T>,
}

impl ContentClient<HttpTransport> {
    /// Client talking HTTP to `config.base_url`.
    pub fn new(config: ContentClientConfig) -> Result<Self, ContentError> {
        config.trace_loaded();
        let transport = HttpTransport::new(&config.base_url)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T> ContentClient<T>
where
    T: Transport,
{
    pub fn with_transport(config: ContentClientConfig, transport: T) -> Self {
        Self {
            get_content_item: GetContentItem::new(config, transport),
        }
    }

    pub fn config(&self) -> &ContentClientConfig {
        self.get_content_item.config()
    }

    /// Relative query URL that [`Self::get_content_item`] would request.
    pub fn content_item_url(&self, id: &str) -> String {
        self.get_content_item.url(&iri_predicate(id))
    }

    pub async fn get_content_item(&self, id: &str) -> Result<ContentItem, ContentError> {
        self.get_content_item.get_content_item(id).await
    }
}
