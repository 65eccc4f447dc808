//! Error types for class-model generation.

use thiserror::Error;
use typeforge_registry::RegistryError;

/// Error type for generation operations.
///
/// Every variant is fatal: the run aborts on the first error and nothing
/// is written.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A referenced type name is absent from the registry.
    #[error("unknown type '{type_name}' referenced during generation")]
    Lookup {
        /// The unresolved type name.
        type_name: String,
    },

    /// A supertype chain revisited a type currently being built.
    #[error("inheritance cycle detected: {path}")]
    Cycle {
        /// The offending chain, rendered as `a -> b -> a`.
        path: String,
    },

    /// Registry/document error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a lookup error for an unresolved type name.
    pub fn lookup(type_name: impl Into<String>) -> Self {
        Self::Lookup {
            type_name: type_name.into(),
        }
    }

    /// Creates a cycle error for the given chain.
    pub fn cycle(path: impl Into<String>) -> Self {
        Self::Cycle { path: path.into() }
    }
}
