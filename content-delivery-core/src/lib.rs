#![doc = "content-delivery-core: core logic library for content-delivery."]

//! This crate fetches published content items from the content delivery API
//! and returns them as self-contained objects: legacy response shapes are
//! upgraded to the current `_meta` schema and media links and nested items
//! are inlined.
//!
//! # Usage
//! Build a [`ContentClient`] from a [`ContentClientConfig`] and call
//! [`ContentClient::get_content_item`]. Tests can substitute the HTTP stack
//! with `contract::MockTransport`.

pub mod client;
pub mod config;
pub mod contract;
pub mod coordinator;
pub mod mapper;
pub mod model;
pub mod query;
pub mod transport;

pub use client::ContentClient;
pub use config::ContentClientConfig;
pub use contract::{ContentError, Transport, TransportError};
pub use model::{ContentBody, ContentItem, ContentMeta, MediaLink};
