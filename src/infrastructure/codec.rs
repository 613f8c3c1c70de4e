//! JSON payload codec.

use crate::application::ports::{CodecError, DocumentCodec};
use crate::domain::document::Document;

/// Encodes documents as flat JSON objects and decodes them back.
///
/// The document's derived serde schema is the field-to-key mapping: string
/// values are quoted, numbers would be emitted as literals, and absent
/// values as `null`. Simple flat records round-trip exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCodec for JsonCodec {
    fn encode(&self, document: &Document) -> Result<String, CodecError> {
        serde_json::to_string(document).map_err(|e| CodecError::new(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<Document, CodecError> {
        serde_json::from_str(text).map_err(|e| CodecError::new(e.to_string()))
    }
}
