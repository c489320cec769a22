/// Errors produced by the schema model and codec.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input is not a well-formed schema document.
    ///
    /// `pointer` is the JSON pointer of the offending value (empty for the
    /// document root or for text that failed to parse).
    #[error("malformed schema at '{pointer}': {reason}")]
    MalformedSchema { pointer: String, reason: String },

    /// An accessor for one variant was called on the other variant.
    #[error("invalid variant access: expected {expected} schema, found {found} schema")]
    InvalidVariantAccess {
        expected: &'static str,
        found: &'static str,
    },

    /// The text serializer rejected the encoded document.
    #[error("failed to encode schema: {0}")]
    EncodeFailed(String),
}

impl SchemaError {
    pub fn malformed(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for decode failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedSchema { .. })
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
