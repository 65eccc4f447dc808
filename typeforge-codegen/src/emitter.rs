//! Declared-attribute emission.
//!
//! Builds one field and accessor pair per declared attribute, applying
//! cardinality wrapping and reserved-word sanitization.

use crate::error::CodegenError;
use crate::generator::ModelGenerator;
use crate::model::{make_member, ClassModelBuilder, TargetType};
use typeforge_registry::{AttributeDef, Cardinality, TypeDef};

impl ModelGenerator<'_> {
    /// Emits every declared attribute of a definition into the builder.
    pub(crate) fn emit_declared_attributes(
        &mut self,
        builder: &mut ClassModelBuilder,
        def: &TypeDef,
    ) -> Result<(), CodegenError> {
        for attribute in &def.attributes {
            self.emit_attribute(builder, attribute)?;
        }
        Ok(())
    }

    /// Emits one attribute as a field plus accessor pair.
    ///
    /// `list`/`set` cardinality wraps the mapped type in a sequence/set
    /// unless the mapped type is already a container, so an `array<T>`
    /// attribute with `list` cardinality is not double-wrapped.
    pub(crate) fn emit_attribute(
        &mut self,
        builder: &mut ClassModelBuilder,
        attribute: &AttributeDef,
    ) -> Result<(), CodegenError> {
        let type_ref = attribute.type_ref()?;
        let mapped = self.map_attribute_type(&type_ref)?;

        let ty = match attribute.cardinality {
            Cardinality::Single => mapped,
            Cardinality::List if mapped.is_container() => mapped,
            Cardinality::List => TargetType::list_of(mapped),
            Cardinality::Set if mapped.is_container() => mapped,
            Cardinality::Set => TargetType::set_of(mapped),
        };

        let (field, accessor) = make_member(&attribute.name, ty);
        builder.add_member(field, accessor);
        Ok(())
    }
}
