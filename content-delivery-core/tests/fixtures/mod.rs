//! Canned query responses, in both the current and the legacy shape.
#![allow(dead_code)]

use serde_json::{json, Value};

pub const DELIVERY_ID: &str = "2c7efa09-7e31-4503-8d00-5a150ff82f17";
pub const PAGE_SCHEMA: &str =
    "https://raw.githubusercontent.com/techiedarren/dc-examples/master/content-types/containers/page.json";
pub const IMAGE_BLOCK_SCHEMA: &str =
    "https://raw.githubusercontent.com/techiedarren/dc-examples/master/content-types/blocks/image-block.json";
pub const ASPECT_RATIO_SCHEMA: &str =
    "https://raw.githubusercontent.com/techiedarren/dc-examples/master/content-types/mixins/aspect-ratio.json";
pub const IMAGE_LINK_SCHEMA: &str = "http://bigcontent.io/cms/schema/v1/core#/definitions/image-link";
pub const VIDEO_LINK_SCHEMA: &str = "http://bigcontent.io/cms/schema/v1/core#/definitions/video-link";
pub const VIDEO_ID: &str = "8a2c1e54-3b0f-4d6e-9c7a-52f1d0b8e613";

/// Query URL for `DELIVERY_ID` in account `test`.
pub const QUERY_URL: &str = "/cms/content/query?query=%7B%22sys.iri%22%3A%22http%3A%2F%2Fcontent.cms.amplience.com%2F2c7efa09-7e31-4503-8d00-5a150ff82f17%22%7D&fullBodyObject=true&scope=tree&store=test";

pub fn no_results() -> Value {
    json!({ "results": [] })
}

pub fn single_result() -> Value {
    json!({
        "results": [{
            "content": {
                "_meta": {
                    "schema": PAGE_SCHEMA,
                    "name": "name",
                    "deliveryId": DELIVERY_ID
                }
            }
        }]
    })
}

pub fn single_legacy_result() -> Value {
    json!({
        "results": [{
            "content": {
                "@id": format!("http://content.cms.amplience.com/{DELIVERY_ID}"),
                "@type": PAGE_SCHEMA,
                "Title": "Title"
            }
        }]
    })
}

pub fn single_result_with_image() -> Value {
    json!({
        "results": [{
            "content": {
                "_meta": {
                    "schema": PAGE_SCHEMA,
                    "deliveryId": DELIVERY_ID
                },
                "image": {
                    "_meta": { "schema": IMAGE_LINK_SCHEMA },
                    "id": "ddf4eac9-7822-401c-97d6-b1be985e421c",
                    "name": "shutterstock_749703970",
                    "endpoint": "dcdemo",
                    "defaultHost": "i1.adis.ws",
                    "mediaType": "image"
                }
            }
        }]
    })
}

pub fn single_legacy_result_with_image() -> Value {
    json!({
        "results": [{
            "content": {
                "@id": format!("http://content.cms.amplience.com/{DELIVERY_ID}"),
                "@type": PAGE_SCHEMA,
                "image": {
                    "@id": "http://image.cms.amplience.com/ddf4eac9-7822-401c-97d6-b1be985e421c",
                    "@type": IMAGE_LINK_SCHEMA,
                    "name": "shutterstock_749703970",
                    "endpoint": "dcdemo",
                    "defaultHost": "i1.adis.ws",
                    "mediaType": "image"
                }
            }
        }]
    })
}

pub fn single_result_with_video() -> Value {
    json!({
        "results": [{
            "content": {
                "_meta": {
                    "schema": PAGE_SCHEMA,
                    "deliveryId": DELIVERY_ID
                },
                "video": {
                    "_meta": { "schema": VIDEO_LINK_SCHEMA },
                    "id": VIDEO_ID,
                    "name": "summer_campaign",
                    "endpoint": "dcdemo",
                    "defaultHost": "i1.adis.ws",
                    "mediaType": "video"
                }
            }
        }]
    })
}

pub fn single_legacy_result_with_video() -> Value {
    json!({
        "results": [{
            "content": {
                "@id": format!("http://content.cms.amplience.com/{DELIVERY_ID}"),
                "@type": PAGE_SCHEMA,
                "video": {
                    "@id": format!("http://video.cms.amplience.com/{VIDEO_ID}"),
                    "@type": VIDEO_LINK_SCHEMA,
                    "name": "summer_campaign",
                    "endpoint": "dcdemo",
                    "defaultHost": "i1.adis.ws",
                    "mediaType": "video"
                }
            }
        }]
    })
}

pub fn nested_content() -> Value {
    json!({
        "results": [{
            "content": {
                "_meta": {
                    "schema": PAGE_SCHEMA,
                    "deliveryId": DELIVERY_ID
                },
                "contentSlots": [{
                    "@id": "http://content.cms.amplience.com/286f3e8e-f088-4956-92c6-a196d7e16c4e",
                    "@type": IMAGE_BLOCK_SCHEMA,
                    "_meta": { "name": "fathers-day-pre-sale" },
                    "image": {
                        "@id": "http://image.cms.amplience.com/ddf4eac9-7822-401c-97d6-b1be985e421c",
                        "_meta": { "schema": IMAGE_LINK_SCHEMA },
                        "id": "ddf4eac9-7822-401c-97d6-b1be985e421c",
                        "name": "shutterstock_749703970",
                        "endpoint": "dcdemo",
                        "defaultHost": "i1.adis.ws",
                        "mediaType": "image"
                    },
                    "mobileAspectRatio": {
                        "@type": ASPECT_RATIO_SCHEMA,
                        "w": 1,
                        "h": 1
                    },
                    "aspectRatio": {
                        "_meta": { "schema": ASPECT_RATIO_SCHEMA },
                        "w": 5,
                        "h": 2
                    }
                }]
            }
        }]
    })
}

/// Inlined form of the image in the `*_with_image` and nested fixtures.
pub fn mapped_image() -> Value {
    json!({
        "_meta": { "schema": IMAGE_LINK_SCHEMA },
        "defaultHost": "i1.adis.ws",
        "endpoint": "dcdemo",
        "id": "ddf4eac9-7822-401c-97d6-b1be985e421c",
        "mediaType": "image",
        "name": "shutterstock_749703970"
    })
}

/// Inlined form of the video in the `*_with_video` fixtures.
pub fn mapped_video() -> Value {
    json!({
        "_meta": { "schema": VIDEO_LINK_SCHEMA },
        "defaultHost": "i1.adis.ws",
        "endpoint": "dcdemo",
        "id": VIDEO_ID,
        "mediaType": "video",
        "name": "summer_campaign"
    })
}
