//! Typed views over mapped content.
//!
//! The mapper produces plain JSON trees; these types are the caller-facing
//! wrappers around them. Nested content stays JSON, only the identity of the
//! top-level item and explicitly requested media links are typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contract::ContentError;

pub const IMAGE_LINK_SCHEMA: &str =
    "http://bigcontent.io/cms/schema/v1/core#/definitions/image-link";
pub const VIDEO_LINK_SCHEMA: &str =
    "http://bigcontent.io/cms/schema/v1/core#/definitions/video-link";

/// Identity of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMeta {
    #[serde(rename = "deliveryId")]
    pub delivery_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub schema: String,
    /// Any further `_meta` keys the API supplied, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Mapped body of a content item: its typed `_meta` plus every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBody {
    #[serde(rename = "_meta")]
    pub meta: ContentMeta,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentBody {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The inlined media link stored under `name`, if that field holds one.
    pub fn media_link(&self, name: &str) -> Option<MediaLink> {
        self.fields
            .get(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// A single content item returned by the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub body: ContentBody,
}

impl ContentItem {
    /// Wrap a mapped body. Fails if the body lacks a well-formed `_meta`.
    pub fn from_mapped(body: Value) -> Result<Self, ContentError> {
        let body = serde_json::from_value(body)
            .map_err(|e| ContentError::malformed("$", format!("invalid content item: {e}")))?;
        Ok(Self { body })
    }

    pub fn meta(&self) -> &ContentMeta {
        &self.body.meta
    }

    /// JSON form of the item, equal to the mapper's output for it.
    pub fn to_json(&self) -> Value {
        // Serializing a struct of strings and JSON values cannot fail.
        serde_json::to_value(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_schema(schema: &str) -> Option<Self> {
        match schema {
            IMAGE_LINK_SCHEMA => Some(MediaKind::Image),
            VIDEO_LINK_SCHEMA => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn schema(self) -> &'static str {
        match self {
            MediaKind::Image => IMAGE_LINK_SCHEMA,
            MediaKind::Video => VIDEO_LINK_SCHEMA,
        }
    }

    fn path_segment(self) -> &'static str {
        match self {
            MediaKind::Image => "i",
            MediaKind::Video => "v",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMeta {
    pub schema: String,
}

/// Resolved image or video reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLink {
    #[serde(rename = "_meta")]
    pub meta: SchemaMeta,
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub default_host: String,
    pub media_type: String,
}

impl MediaLink {
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_schema(&self.meta.schema)
    }

    /// Public URL of the asset, e.g. `https://i1.adis.ws/i/dcdemo/shutterstock_749703970`.
    pub fn url(&self) -> String {
        let segment = self.kind().unwrap_or(MediaKind::Image).path_segment();
        format!(
            "https://{}/{}/{}/{}",
            self.default_host, segment, self.endpoint, self.name
        )
    }
}
