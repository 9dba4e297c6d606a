use anyhow::Context;
use serde_json::Value;

use crate::media::MediaType;

/// Parses raw request-body bytes into the entity model.
pub trait Reader: Send + Sync {
    /// The concrete media type this reader is registered for.
    fn media_type(&self) -> MediaType;

    /// Parse the body. An error here surfaces as a 400-class
    /// `MalformedRequestBody` condition.
    fn read(&self, body: &[u8]) -> anyhow::Result<Value>;
}

/// Serializes a response entity into body bytes.
pub trait Writer: Send + Sync {
    /// The concrete media type this writer is registered for.
    fn media_type(&self) -> MediaType;

    /// Serialize the entity. An error here surfaces as a 500-class
    /// `SerializationFailure` condition.
    fn write(&self, entity: &Value) -> anyhow::Result<Vec<u8>>;
}

/// Default `application/json` reader built on serde_json.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReader;

impl Reader for JsonReader {
    fn media_type(&self) -> MediaType {
        MediaType::json()
    }

    fn read(&self, body: &[u8]) -> anyhow::Result<Value> {
        serde_json::from_slice(body).context("invalid JSON request body")
    }
}

/// Default `application/json` writer built on serde_json.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter;

impl Writer for JsonWriter {
    fn media_type(&self) -> MediaType {
        MediaType::json()
    }

    fn write(&self, entity: &Value) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec(entity).context("JSON response serialization failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_reader_parses_body() {
        let value = JsonReader.read(br#"{"qty":3}"#).expect("parse");
        assert_eq!(value, json!({ "qty": 3 }));
    }

    #[test]
    fn test_json_reader_rejects_garbage() {
        assert!(JsonReader.read(b"{not json").is_err());
    }

    #[test]
    fn test_json_writer_round_trips_entity() {
        let bytes = JsonWriter.write(&json!({ "qty": 6 })).expect("write");
        assert_eq!(bytes, br#"{"qty":6}"#.to_vec());
    }
}
