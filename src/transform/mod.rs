//! Reader and writer capabilities for request/response bodies.
//!
//! A [`Reader`] turns raw request bytes into the in-flight entity model
//! (`serde_json::Value`); a [`Writer`] turns an entity back into response
//! bytes. Both are keyed by the [`MediaType`](crate::media::MediaType) they
//! serve and are registered on the
//! [`ContextBuilder`](crate::context::ContextBuilder) at startup. Failures
//! cross the plug-in boundary as `anyhow::Error` and are mapped to
//! `MalformedRequestBody` / `SerializationFailure` by the processor.

mod core;

pub use core::{JsonReader, JsonWriter, Reader, Writer};
