use std::collections::HashMap;

use serde_json::{json, Value};

/// The mutable response model actions and aspects work against.
///
/// Carries the status, headers, and an optional response entity; the
/// negotiated writer turns the entity into body bytes at the end of the
/// pipeline.
#[derive(Debug)]
pub struct ResponseModel {
    pub status: u16,
    headers: HashMap<String, String>,
    pub entity: Option<Value>,
}

impl ResponseModel {
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(200)
    }

    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            entity: None,
        }
    }

    /// Set the status and entity in one call; the usual shape for actions.
    #[must_use]
    pub fn entity(status: u16, entity: Value) -> Self {
        let mut model = Self::with_status(status);
        model.entity = Some(entity);
        model
    }

    /// Build an error-shaped body: `{"error": {"message", "status"}}`.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::entity(
            status,
            json!({ "error": { "message": message, "status": status } }),
        )
    }

    /// Add or replace a header (names normalized to lowercase).
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub(crate) fn take_headers(&mut self) -> HashMap<String, String> {
        std::mem::take(&mut self.headers)
    }
}

impl Default for ResponseModel {
    fn default() -> Self {
        Self::new()
    }
}

/// The finished response handed back to the transport adapter: status,
/// headers, and serialized body bytes.
#[derive(Debug)]
pub struct RouteResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RouteResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
