//! Supertype merging and baseline attributes.
//!
//! Ensures every supertype of a subtype is fully built, then unions the
//! finalized supertype members into the subtype. Hierarchy roots receive
//! the fixed baseline bookkeeping fields instead.

use crate::error::CodegenError;
use crate::generator::ModelGenerator;
use crate::model::{make_member, ClassModelBuilder, ScalarType, TargetType};

impl ModelGenerator<'_> {
    /// Merges every supertype's fields and accessors into the builder.
    ///
    /// Fields reachable through two inheritance paths (diamond) are
    /// deduplicated by exact `(name, type)` identity inside the builder.
    ///
    /// The subtype is already marked in progress by the orchestrator, so
    /// a supertype chain that loops back is caught here as a `Cycle`
    /// error rather than recursing without bound; memoization of
    /// completed models alone would miss it.
    pub(crate) fn merge_super_types(
        &mut self,
        builder: &mut ClassModelBuilder,
        super_types: &[String],
    ) -> Result<(), CodegenError> {
        for super_name in super_types {
            if self.ctx.is_in_progress(super_name) {
                return Err(CodegenError::cycle(self.ctx.cycle_path(super_name)));
            }

            self.ensure_generated(super_name)?;

            let super_model = self
                .ctx
                .model(super_name)
                .cloned()
                .ok_or_else(|| CodegenError::lookup(super_name))?;

            tracing::debug!(
                "merging {} inherited fields from {}",
                super_model.fields.len(),
                super_name
            );
            for (field, accessor) in super_model
                .fields
                .into_iter()
                .zip(super_model.accessors)
            {
                builder.add_member(field, accessor);
            }
        }

        Ok(())
    }

    /// Injects the fixed baseline field set for a hierarchy root.
    ///
    /// Injected exactly once per hierarchy; subtypes pick the fields up
    /// through ordinary supertype merging.
    pub(crate) fn inject_baseline(&self, builder: &mut ClassModelBuilder) {
        for (name, ty) in baseline_members() {
            let (field, accessor) = make_member(name, ty);
            builder.add_member(field, accessor);
        }
    }
}

/// The baseline bookkeeping members every root type carries.
pub(crate) fn baseline_members() -> Vec<(&'static str, TargetType)> {
    vec![
        ("guid", TargetType::Scalar(ScalarType::String)),
        ("createdBy", TargetType::Scalar(ScalarType::String)),
        ("updatedBy", TargetType::Scalar(ScalarType::String)),
        ("createTime", TargetType::Scalar(ScalarType::Date)),
        ("updateTime", TargetType::Scalar(ScalarType::Date)),
        ("version", TargetType::Scalar(ScalarType::Long)),
        ("description", TargetType::Scalar(ScalarType::String)),
        ("typeVersion", TargetType::Scalar(ScalarType::String)),
        (
            "options",
            TargetType::map_of(
                TargetType::Scalar(ScalarType::String),
                TargetType::Scalar(ScalarType::String),
            ),
        ),
    ]
}
