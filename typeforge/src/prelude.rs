//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use typeforge::prelude::*;
//! ```

// Registry types
pub use typeforge_registry::{
    AttrTypeRef, AttributeDef, Cardinality, EnumElementDef, RegistryError, ScalarKind, TypeDef,
    TypeKind, TypeRegistry, TypesDocument,
};

// Codegen types
pub use typeforge_codegen::{
    generate_to_writer, Backend, ClassModel, CodegenError, JavaBackend, ModelGenerator, ModelKind,
    ScalarType, SourceWriter, TargetType,
};

// Metrics types
pub use typeforge_metrics::{
    MetricSnapshot, MetricsCollector, MetricsConfig, MetricsError, MetricsPublisher,
    MetricsService, MetricsSink,
};
