//! Error types for document loading and registry access.

use thiserror::Error;

/// Error type for loading and registering type definitions.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// JSON deserialization error.
    #[error("malformed type-definition document: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error reading a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid attribute type string.
    #[error("invalid type reference '{type_name}' on attribute '{attribute}'")]
    InvalidTypeRef {
        /// Attribute name.
        attribute: String,
        /// Offending type-name string.
        type_name: String,
    },

    /// Invalid definition structure.
    #[error("invalid {kind} definition '{name}': {message}")]
    InvalidDefinition {
        /// Kind of definition (enum, struct, ...).
        kind: String,
        /// Name of the definition.
        name: String,
        /// Error message.
        message: String,
    },
}

impl RegistryError {
    /// Creates an invalid type reference error.
    pub fn invalid_type_ref(attribute: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            attribute: attribute.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an invalid definition error.
    pub fn invalid_definition(
        kind: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidDefinition {
            kind: kind.into(),
            name: name.into(),
            message: message.into(),
        }
    }
}
