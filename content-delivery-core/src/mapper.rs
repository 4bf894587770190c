//! Response mapper: upgrades legacy content and inlines linked entities.
//!
//! The query API answers in two shapes. Current items carry a `_meta` block
//! (`deliveryId`, `name`, `schema`). Legacy items are JSON-LD style envelopes
//! where identity lives in `@id`, the schema in `@type` and the name in a
//! `Title` field. Media links and nested items appear in either shape anywhere
//! inside a body.
//!
//! Mapping runs in two steps per node: [`classify`] decides once what a node
//! is, then the per-variant transform rebuilds it bottom-up. Anything that
//! looks like an entity but cannot be upgraded rejects the whole response
//! with [`ContentError::MalformedResponse`] instead of leaking a partially
//! inlined object.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::contract::ContentError;
use crate::model::{MediaKind, MediaLink, SchemaMeta};

const META: &str = "_meta";
const LEGACY_ID: &str = "@id";
const LEGACY_TYPE: &str = "@type";
const LEGACY_TITLE: &str = "Title";
const PRESERVED_TITLE: &str = "_title";

/// Raw body returned by the query endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentResult {
    #[serde(default)]
    pub results: Vec<RawResultEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawResultEntry {
    #[serde(default)]
    pub content: Option<Value>,
}

/// Which envelope a node is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Current,
    Legacy,
}

/// Classification of a top-level result entry.
#[derive(Debug, PartialEq)]
pub enum EntryShape<'a> {
    Current(&'a Map<String, Value>),
    Legacy(&'a Map<String, Value>),
    Unrecognized(&'static str),
}

/// Classification of a node inside a body.
#[derive(Debug, PartialEq)]
pub enum Node<'a> {
    Scalar(&'a Value),
    Array(&'a [Value]),
    /// Object without any entity markers.
    Object(&'a Map<String, Value>),
    /// Schema-typed object without identity, e.g. a mixin.
    Typed(Shape, &'a Map<String, Value>),
    MediaLink(MediaKind, Shape, &'a Map<String, Value>),
    ContentItem(Shape, &'a Map<String, Value>),
}

pub fn classify_entry(entry: &RawResultEntry) -> EntryShape<'_> {
    let Some(content) = entry.content.as_ref() else {
        return EntryShape::Unrecognized("entry has no content");
    };
    let Value::Object(object) = content else {
        return EntryShape::Unrecognized("content is not an object");
    };
    match shape_of(object) {
        Some(Shape::Legacy) => EntryShape::Legacy(object),
        Some(Shape::Current) => EntryShape::Current(object),
        None => EntryShape::Unrecognized("content matches neither the current nor the legacy shape"),
    }
}

pub fn classify(value: &Value) -> Node<'_> {
    let object = match value {
        Value::Array(items) => return Node::Array(items),
        Value::Object(object) => object,
        scalar => return Node::Scalar(scalar),
    };
    let Some(shape) = shape_of(object) else {
        return Node::Object(object);
    };
    if let Some(kind) = schema_of(object, shape).and_then(MediaKind::from_schema) {
        return Node::MediaLink(kind, shape, object);
    }
    if has_identity(object, shape) {
        Node::ContentItem(shape, object)
    } else {
        Node::Typed(shape, object)
    }
}

/// Decode a raw response body and map every result in it.
pub fn map_response(raw: &Value) -> Result<Vec<Value>, ContentError> {
    let result = RawContentResult::deserialize(raw)
        .map_err(|e| ContentError::malformed("$", format!("not a query result: {e}")))?;
    map_results(&result)
}

/// Upgrade and inline every result entry, in order.
///
/// An entry that matches neither shape rejects the whole result set.
pub fn map_results(raw: &RawContentResult) -> Result<Vec<Value>, ContentError> {
    raw.results
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let path = format!("$.results[{index}].content");
            match classify_entry(entry) {
                EntryShape::Current(object) => map_item(Shape::Current, object, &path),
                EntryShape::Legacy(object) => map_item(Shape::Legacy, object, &path),
                EntryShape::Unrecognized(reason) => Err(ContentError::malformed(path, reason)),
            }
        })
        .collect()
}

fn map_node(value: &Value, path: &str) -> Result<Value, ContentError> {
    match classify(value) {
        Node::Scalar(scalar) => Ok(scalar.clone()),
        Node::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| map_node(item, &format!("{path}[{index}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Node::Object(object) => map_fields(object, path, &[]).map(Value::Object),
        Node::Typed(shape, object) => map_typed(shape, object, path),
        Node::MediaLink(kind, shape, object) => map_media_link(kind, shape, object, path),
        Node::ContentItem(shape, object) => map_item(shape, object, path),
    }
}

fn map_fields(
    object: &Map<String, Value>,
    path: &str,
    skip: &[&str],
) -> Result<Map<String, Value>, ContentError> {
    let mut mapped = Map::new();
    for (key, value) in object {
        if skip.contains(&key.as_str()) {
            continue;
        }
        mapped.insert(key.clone(), map_node(value, &format!("{path}.{key}"))?);
    }
    Ok(mapped)
}

fn map_item(
    shape: Shape,
    object: &Map<String, Value>,
    path: &str,
) -> Result<Value, ContentError> {
    let meta = match shape {
        Shape::Current => {
            let meta = current_meta(object, path)?;
            if !meta.get("deliveryId").is_some_and(Value::is_string) {
                return Err(ContentError::malformed(
                    format!("{path}._meta"),
                    "content item has no deliveryId",
                ));
            }
            let mut meta = meta.clone();
            retain_string_name(&mut meta);
            meta
        }
        Shape::Legacy => legacy_item_meta(object, path)?,
    };

    let mut mapped = match shape {
        Shape::Current => map_fields(object, path, &[META])?,
        Shape::Legacy => {
            let mapped = map_legacy_fields(object, path)?;
            debug!(path, "Upgraded legacy content item");
            mapped
        }
    };
    mapped.insert(META.to_string(), Value::Object(meta));
    Ok(Value::Object(mapped))
}

fn map_typed(
    shape: Shape,
    object: &Map<String, Value>,
    path: &str,
) -> Result<Value, ContentError> {
    let (meta, mut mapped) = match shape {
        Shape::Current => {
            let mut meta = current_meta(object, path)?.clone();
            retain_string_name(&mut meta);
            (meta, map_fields(object, path, &[META])?)
        }
        Shape::Legacy => {
            let mut meta = legacy_meta_block(object);
            meta.insert("schema".to_string(), Value::String(legacy_schema(object, path)?));
            name_from_title(&mut meta, object);
            (meta, map_legacy_fields(object, path)?)
        }
    };
    mapped.insert(META.to_string(), Value::Object(meta));
    Ok(Value::Object(mapped))
}

fn map_media_link(
    kind: MediaKind,
    shape: Shape,
    object: &Map<String, Value>,
    path: &str,
) -> Result<Value, ContentError> {
    let id = match (required_str(object, "id", path), shape) {
        (Ok(id), _) => id,
        (Err(_), Shape::Legacy) => legacy_id(object, path)?,
        (Err(e), Shape::Current) => return Err(e),
    };
    let link = MediaLink {
        meta: SchemaMeta {
            schema: kind.schema().to_string(),
        },
        id,
        name: required_str(object, "name", path)?,
        endpoint: required_str(object, "endpoint", path)?,
        default_host: required_str(object, "defaultHost", path)?,
        media_type: required_str(object, "mediaType", path)?,
    };
    serde_json::to_value(link)
        .map_err(|e| ContentError::malformed(path, format!("media link did not serialize: {e}")))
}

fn shape_of(object: &Map<String, Value>) -> Option<Shape> {
    if object.contains_key(LEGACY_ID) || object.contains_key(LEGACY_TYPE) {
        Some(Shape::Legacy)
    } else if object.contains_key(META) {
        Some(Shape::Current)
    } else {
        None
    }
}

fn schema_of(object: &Map<String, Value>, shape: Shape) -> Option<&str> {
    let meta_schema = || object.get(META)?.get("schema")?.as_str();
    match shape {
        Shape::Current => meta_schema(),
        Shape::Legacy => object
            .get(LEGACY_TYPE)
            .and_then(Value::as_str)
            .or_else(meta_schema),
    }
}

fn has_identity(object: &Map<String, Value>, shape: Shape) -> bool {
    match shape {
        Shape::Current => object
            .get(META)
            .is_some_and(|meta| meta.get("deliveryId").is_some()),
        Shape::Legacy => object.contains_key(LEGACY_ID),
    }
}

fn current_meta<'a>(
    object: &'a Map<String, Value>,
    path: &str,
) -> Result<&'a Map<String, Value>, ContentError> {
    let meta_path = format!("{path}._meta");
    let Some(Value::Object(meta)) = object.get(META) else {
        return Err(ContentError::malformed(meta_path, "_meta is not an object"));
    };
    if !meta.get("schema").is_some_and(Value::is_string) {
        return Err(ContentError::malformed(meta_path, "missing schema"));
    }
    Ok(meta)
}

fn legacy_meta_block(object: &Map<String, Value>) -> Map<String, Value> {
    match object.get(META) {
        Some(Value::Object(meta)) => meta.clone(),
        _ => Map::new(),
    }
}

fn legacy_schema(object: &Map<String, Value>, path: &str) -> Result<String, ContentError> {
    schema_of(object, Shape::Legacy)
        .map(str::to_string)
        .ok_or_else(|| ContentError::malformed(path, "legacy entity has no @type or _meta.schema"))
}

/// Delivery id carried by a legacy `@id` IRI: its last path segment.
fn legacy_id(object: &Map<String, Value>, path: &str) -> Result<String, ContentError> {
    let iri = object
        .get(LEGACY_ID)
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::malformed(path, "@id is missing or not a string"))?;
    iri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ContentError::malformed(path, format!("cannot derive an id from @id {iri:?}")))
}

fn legacy_item_meta(
    object: &Map<String, Value>,
    path: &str,
) -> Result<Map<String, Value>, ContentError> {
    let mut meta = legacy_meta_block(object);
    meta.insert("deliveryId".to_string(), Value::String(legacy_id(object, path)?));
    meta.insert("schema".to_string(), Value::String(legacy_schema(object, path)?));

    name_from_title(&mut meta, object);
    Ok(meta)
}

/// Drop a `name` that is not a string; absent names are omitted, never null.
fn retain_string_name(meta: &mut Map<String, Value>) {
    if !meta.get("name").is_some_and(Value::is_string) {
        meta.remove("name");
    }
}

/// Fall back to the legacy `Title` when the `_meta` block carries no name.
fn name_from_title(meta: &mut Map<String, Value>, object: &Map<String, Value>) {
    retain_string_name(meta);
    if meta.contains_key("name") {
        return;
    }
    if let Some(title) = object.get(LEGACY_TITLE).and_then(Value::as_str) {
        meta.insert("name".to_string(), Value::String(title.to_string()));
    }
}

/// Walk the fields of a legacy object, dropping envelope keys and keeping `Title` as `_title`.
fn map_legacy_fields(
    object: &Map<String, Value>,
    path: &str,
) -> Result<Map<String, Value>, ContentError> {
    let mut mapped = map_fields(object, path, &[META, LEGACY_ID, LEGACY_TYPE, LEGACY_TITLE])?;
    if let Some(title) = object.get(LEGACY_TITLE) {
        mapped.insert(PRESERVED_TITLE.to_string(), title.clone());
    }
    Ok(mapped)
}

fn required_str(object: &Map<String, Value>, key: &str, path: &str) -> Result<String, ContentError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ContentError::malformed(path, format!("media link is missing {key}")))
}
