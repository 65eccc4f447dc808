//! # Typeforge
//!
//! Type-definition driven class generation for metadata models.
//!
//! Typeforge takes a registry of type definitions (enums, structs,
//! classifications, and entities) related by inheritance and attribute
//! references and produces exactly one generated class per type, with
//! inherited attributes merged across the supertype graph and identifiers
//! sanitized against reserved words.
//!
//! ## Quick Start
//!
//! ```
//! use typeforge::prelude::*;
//!
//! let document = TypesDocument::from_json(
//!     r#"{"entityDefs": [{"name": "asset"}]}"#,
//! ).unwrap();
//!
//! let mut registry = TypeRegistry::new();
//! registry.add_document(document);
//!
//! let mut out = Vec::new();
//! generate_to_writer(&registry, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("public class Asset"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`registry`] - Type-definition documents and the type registry
//! - [`codegen`] - Class-model generation and rendering
//! - [`metrics`] - Periodic metrics collection and publishing

pub mod prelude;

/// Type-definition documents and the type registry.
pub mod registry {
    pub use typeforge_registry::*;
}

/// Class-model generation and rendering.
pub mod codegen {
    pub use typeforge_codegen::*;
}

/// Periodic metrics collection and publishing.
pub mod metrics {
    pub use typeforge_metrics::*;
}
