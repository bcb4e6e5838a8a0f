//! # Framework Errors
//!
//! Errors raised by the codec. Storage never raises for a missing record (absence is an
//! `Option`), so the only framework-level failures are encoding and decoding problems.

/// Errors that can occur while encoding or decoding an entity.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serde could not lower the entity into a JSON value.
    #[error("Encode failed for {entity}: {source}")]
    Encode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A declared field is missing or carries a value that violates its directives.
    #[error("Decode error in field `{field}`: {reason}")]
    Decode { field: String, reason: String },

    /// The input is not JSON, not an object, or does not fit the entity's shape.
    #[error("Malformed input for {entity}: {source}")]
    Malformed {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    pub(crate) fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field, for [`CodecError::Decode`].
    pub fn field(&self) -> Option<&str> {
        match self {
            CodecError::Decode { field, .. } => Some(field),
            _ => None,
        }
    }
}
