//! Builds content query URLs.
//!
//! Queries are always issued with `fullBodyObject=true&scope=tree`, so the
//! response embeds every linked item and media reference and the mapper can
//! inline them without further requests.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path of the query endpoint, relative to the delivery host.
pub const QUERY_PATH: &str = "/cms/content/query";

/// Namespace of content item IRIs; a delivery id is appended to form `sys.iri`.
pub const CONTENT_IRI_PREFIX: &str = "http://content.cms.amplience.com/";

// Everything but the `encodeURIComponent` unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query predicate, e.g. `{"sys.iri": "http://content.cms.amplience.com/<id>"}`.
///
/// Keys serialize in sorted order, not insertion order. The API matches
/// predicates by key, so ordering only shows up in the URL text.
pub type Predicate = BTreeMap<String, String>;

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// `sys.iri` of the content item with the given delivery id.
pub fn content_iri(delivery_id: &str) -> String {
    format!("{CONTENT_IRI_PREFIX}{delivery_id}")
}

/// Predicate selecting the single content item with the given delivery id.
pub fn iri_predicate(delivery_id: &str) -> Predicate {
    let mut predicate = Predicate::new();
    predicate.insert("sys.iri".to_string(), content_iri(delivery_id));
    predicate
}

/// Relative query URL for `predicate` in `account`, optionally localised.
pub fn build_url(predicate: &Predicate, account: &str, locale: Option<&str>) -> String {
    // A map of strings always serializes.
    let query = serde_json::to_string(predicate).unwrap_or_else(|_| "{}".to_string());

    let mut url = format!(
        "{QUERY_PATH}?query={}&fullBodyObject=true&scope=tree&store={}",
        encode_component(&query),
        encode_component(account)
    );
    if let Some(locale) = locale {
        url.push_str("&locale=");
        url.push_str(&encode_component(locale));
    }
    url
}
