use std::collections::HashMap;

use http::Method;
use serde_json::Value;
use smallvec::SmallVec;

use crate::path::ParamValue;

/// Maximum number of path parameters before heap allocation.
/// Most REST routes have well under 8 parameters.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated storage for extracted path parameters.
pub type ParamVec = SmallVec<[(String, ParamValue); MAX_INLINE_PARAMS]>;

/// An inbound request as handed over by the transport adapter.
///
/// The transport is responsible for wire parsing; by the time the processor
/// sees a request it is already split into method, path, headers, and body
/// bytes. Header names are normalized to lowercase on insertion so lookup
/// is case-insensitive.
#[derive(Debug)]
pub struct RouteRequest {
    pub method: Method,
    pub path: String,
    headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RouteRequest {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Add a header, normalizing the name to lowercase. Chainable for
    /// transport adapters and tests.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The raw Content-Type header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// The raw Accept header value, if present.
    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.header("accept")
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// The request as seen by aspects and actions: extracted path parameters
/// plus the deserialized body entity.
#[derive(Debug)]
pub struct HandlerRequest {
    pub method: Method,
    pub path: String,
    pub params: ParamVec,
    pub headers: HashMap<String, String>,
    /// The deserialized request body, present only when the request carried
    /// one and a reader was resolved.
    pub entity: Option<Value>,
}

impl HandlerRequest {
    /// Get a path parameter by name.
    ///
    /// Uses "last write wins" semantics: when the same parameter name
    /// appears at several path depths, the deepest occurrence is returned.
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Get a header by name (case-insensitive; keys are stored lowercase).
    #[inline]
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
