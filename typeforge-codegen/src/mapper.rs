//! Attribute-type mapping.
//!
//! A total, deterministic function from the closed set of attribute type
//! references to target type descriptors. Mapping a reference to a
//! composite type that has not been generated yet triggers its generation
//! first (recursive descent).

use crate::error::CodegenError;
use crate::generator::ModelGenerator;
use crate::model::{ScalarType, TargetType};
use typeforge_registry::{AttrTypeRef, ScalarKind};

/// Maps a source scalar kind to its target scalar type.
#[must_use]
pub fn map_scalar(kind: ScalarKind) -> ScalarType {
    match kind {
        ScalarKind::Boolean => ScalarType::Boolean,
        ScalarKind::Byte => ScalarType::Byte,
        ScalarKind::Short => ScalarType::Short,
        ScalarKind::Int => ScalarType::Int,
        ScalarKind::Long => ScalarType::Long,
        ScalarKind::Double => ScalarType::Double,
        ScalarKind::BigInteger => ScalarType::BigInteger,
        ScalarKind::BigDecimal => ScalarType::BigDecimal,
        ScalarKind::Date => ScalarType::Date,
        ScalarKind::String => ScalarType::String,
    }
}

impl ModelGenerator<'_> {
    /// Maps an attribute type reference to a target type.
    ///
    /// A named reference to a type that is neither completed nor in
    /// progress is generated on the spot. A reference to an in-progress
    /// type only needs its class name, so self-referential and mutually
    /// referential attributes terminate without recursing.
    ///
    /// # Errors
    /// `Lookup` if a named reference is absent from the registry; any
    /// error from recursively generating a referenced type.
    pub(crate) fn map_attribute_type(
        &mut self,
        type_ref: &AttrTypeRef,
    ) -> Result<TargetType, CodegenError> {
        match type_ref {
            AttrTypeRef::Scalar(kind) => Ok(TargetType::Scalar(map_scalar(*kind))),
            AttrTypeRef::Array(element) => {
                Ok(TargetType::list_of(self.map_attribute_type(element)?))
            }
            AttrTypeRef::Map(key, value) => Ok(TargetType::map_of(
                self.map_attribute_type(key)?,
                self.map_attribute_type(value)?,
            )),
            AttrTypeRef::Named(name) => {
                if !self.registry().contains(name) {
                    return Err(CodegenError::lookup(name));
                }
                if !self.ctx.is_processed(name) && !self.ctx.is_in_progress(name) {
                    self.ensure_generated(name)?;
                }
                Ok(TargetType::Object(self.ctx.class_name(name)))
            }
        }
    }
}
