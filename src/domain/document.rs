//! The document payload submitted to the remote endpoint.

use serde::{Deserialize, Serialize};

/// A document submission record.
///
/// The field set is the statically declared schema of the wire body: each
/// field maps to one flat key in the encoded text. The caller's credential
/// ("signature") is deliberately not part of the record; it travels as
/// transport metadata alongside the body, never inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the submitting participant
    pub participant_id: String,
    /// Identifier of the document itself
    pub document_id: String,
    /// Current document status
    pub status: String,
}

impl Document {
    /// Create a document record.
    pub fn new(
        participant_id: impl Into<String>,
        document_id: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            document_id: document_id.into(),
            status: status.into(),
        }
    }
}
