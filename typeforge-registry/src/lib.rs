//! # Typeforge Registry
//!
//! Type-definition documents and the read-only type registry.
//!
//! This crate provides:
//! - Data model for enum/struct/classification/entity definitions
//! - JSON document loading and merging
//! - The registry consumed by the code generator

pub mod document;
pub mod error;
pub mod registry;
pub mod types;

pub use document::{CompositeDocDef, EnumDocDef, StructDocDef, TypesDocument};
pub use error::RegistryError;
pub use registry::TypeRegistry;
pub use types::{
    AttrTypeRef, AttributeDef, Cardinality, EnumElementDef, ScalarKind, TypeDef, TypeKind,
};
