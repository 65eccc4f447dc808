//! # Typeforge Codegen
//!
//! Class-model generation from a populated type registry.
//!
//! This crate provides:
//! - A language-neutral class-model structure
//! - Total attribute-type mapping with recursive descent
//! - Supertype merging with diamond dedup and cycle detection
//! - A Java rendering backend and an atomic output writer

pub mod emitter;
pub mod error;
pub mod generator;
pub mod java;
pub mod mapper;
pub mod merger;
pub mod model;
pub mod naming;
pub mod writer;

pub use error::CodegenError;
pub use generator::ModelGenerator;
pub use java::{Backend, JavaBackend};
pub use model::{AccessorSpec, ClassModel, FieldSpec, ModelKind, ScalarType, TargetType};
pub use writer::SourceWriter;

use typeforge_registry::TypeRegistry;

/// Generates every class model from the registry and writes the rendered
/// Java definitions to the destination.
///
/// All-or-nothing: models are built and buffered in full before the first
/// byte is written, so a failed run produces no output.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_writer(
    registry: &TypeRegistry,
    out: &mut impl std::io::Write,
) -> Result<(), CodegenError> {
    let models = ModelGenerator::new(registry).run()?;
    SourceWriter::new(out).write_all(&models, &JavaBackend::new())
}
