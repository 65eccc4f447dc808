//! Class-model generation orchestrator.
//!
//! Drives the fixed four-pass traversal (enums, structs, classifications,
//! entities) over the registry. Within a pass, types are visited in
//! registry order, but unprocessed dependencies encountered mid-traversal
//! are generated immediately via recursive descent, so true completion
//! order is dependency-first.

use crate::error::CodegenError;
use crate::model::{ClassModel, ClassModelBuilder, ModelKind};
use crate::naming::to_class_name;
use std::collections::HashMap;
use typeforge_registry::{TypeDef, TypeKind, TypeRegistry};

/// Mutable state owned by one generation run.
///
/// Nothing here outlives the run, so repeated or concurrent runs never
/// share caches.
#[derive(Debug, Default)]
pub(crate) struct GenerationContext {
    processed: HashMap<String, ClassModel>,
    completion_order: Vec<String>,
    in_progress: Vec<String>,
    class_names: HashMap<String, String>,
}

impl GenerationContext {
    pub(crate) fn is_processed(&self, type_name: &str) -> bool {
        self.processed.contains_key(type_name)
    }

    pub(crate) fn is_in_progress(&self, type_name: &str) -> bool {
        self.in_progress.iter().any(|n| n == type_name)
    }

    pub(crate) fn model(&self, type_name: &str) -> Option<&ClassModel> {
        self.processed.get(type_name)
    }

    /// Returns the recorded class name for a type, computing it if the
    /// type has not been visited yet.
    pub(crate) fn class_name(&self, type_name: &str) -> String {
        self.class_names
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| to_class_name(type_name))
    }

    /// Marks a type as in progress and records its class name.
    fn begin(&mut self, type_name: &str, class_name: String) {
        self.class_names.insert(type_name.to_string(), class_name);
        self.in_progress.push(type_name.to_string());
    }

    /// Moves a type from in-progress to processed.
    fn finish(&mut self, type_name: &str, model: ClassModel) {
        self.in_progress.retain(|n| n != type_name);
        self.completion_order.push(type_name.to_string());
        self.processed.insert(type_name.to_string(), model);
    }

    /// Renders the in-progress chain ending in the revisited type.
    pub(crate) fn cycle_path(&self, revisited: &str) -> String {
        let mut path: Vec<&str> = self.in_progress.iter().map(String::as_str).collect();
        path.push(revisited);
        path.join(" -> ")
    }

    /// Consumes the context, yielding models in completion order.
    fn into_models(mut self) -> Vec<ClassModel> {
        let order = std::mem::take(&mut self.completion_order);
        order
            .iter()
            .filter_map(|name| self.processed.remove(name))
            .collect()
    }
}

/// Generates one class model per registered type definition.
pub struct ModelGenerator<'a> {
    registry: &'a TypeRegistry,
    pub(crate) ctx: GenerationContext,
}

impl<'a> ModelGenerator<'a> {
    /// Creates a generator over the given registry with an empty run
    /// context.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        tracing::info!("{} enums", registry.enum_defs().count());
        tracing::info!("{} structs", registry.struct_defs().count());
        tracing::info!("{} classifications", registry.classification_defs().count());
        tracing::info!("{} entities", registry.entity_defs().count());

        Self {
            registry,
            ctx: GenerationContext::default(),
        }
    }

    /// Returns the registry this run reads from.
    #[must_use]
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Returns the completed model for a type, if built.
    #[must_use]
    pub fn model(&self, type_name: &str) -> Option<&ClassModel> {
        self.ctx.model(type_name)
    }

    /// Runs all four passes and returns every model in completion order.
    ///
    /// # Errors
    /// Returns the first `CodegenError` encountered; on error no models
    /// are returned at all.
    pub fn run(mut self) -> Result<Vec<ClassModel>, CodegenError> {
        tracing::debug!("==> ModelGenerator::run");

        let registry = self.registry;
        for def in registry.enum_defs() {
            self.ensure_generated(&def.name)?;
        }
        for def in registry.struct_defs() {
            self.ensure_generated(&def.name)?;
        }
        for def in registry.classification_defs() {
            self.ensure_generated(&def.name)?;
        }
        for def in registry.entity_defs() {
            self.ensure_generated(&def.name)?;
        }

        tracing::debug!("<== ModelGenerator::run");
        Ok(self.ctx.into_models())
    }

    /// Generates the model for a type unless it already exists.
    ///
    /// Revisiting a completed type is a no-op; this is safe to call from
    /// any site, including recursively from the type mapper and the
    /// supertype merger.
    ///
    /// # Errors
    /// `Lookup` if the name is not registered; `Cycle` if the type is
    /// currently being built further up the call chain.
    pub fn ensure_generated(&mut self, type_name: &str) -> Result<(), CodegenError> {
        if self.ctx.is_processed(type_name) {
            return Ok(());
        }

        let def = self
            .registry
            .get(type_name)
            .cloned()
            .ok_or_else(|| CodegenError::lookup(type_name))?;

        if self.ctx.is_in_progress(type_name) {
            return Err(CodegenError::cycle(self.ctx.cycle_path(type_name)));
        }

        let class_name = to_class_name(type_name);
        tracing::info!(
            "modeling {} class for {}: {}",
            def.kind.as_str(),
            type_name,
            class_name
        );

        self.ctx.begin(type_name, class_name.clone());
        let model = self.build_model(&def, class_name)?;
        self.ctx.finish(type_name, model);

        Ok(())
    }

    fn build_model(
        &mut self,
        def: &TypeDef,
        class_name: String,
    ) -> Result<ClassModel, CodegenError> {
        match def.kind {
            TypeKind::Enum => Ok(build_enum_model(def, class_name)),
            TypeKind::Struct => {
                let mut builder = ClassModelBuilder::new(&def.name, class_name, ModelKind::Class);
                self.inject_baseline(&mut builder);
                self.emit_declared_attributes(&mut builder, def)?;
                Ok(builder.build())
            }
            TypeKind::Classification | TypeKind::Entity => {
                let mut builder = ClassModelBuilder::new(&def.name, class_name, ModelKind::Class);
                if def.is_root() {
                    self.inject_baseline(&mut builder);
                } else {
                    self.merge_super_types(&mut builder, &def.super_types)?;
                }
                self.emit_declared_attributes(&mut builder, def)?;
                Ok(builder.build())
            }
        }
    }
}

/// Builds an enum model with constants ordered by explicit ordinal.
fn build_enum_model(def: &TypeDef, class_name: String) -> ClassModel {
    let mut builder = ClassModelBuilder::new(&def.name, class_name, ModelKind::Enum);

    let mut elements = def.elements.clone();
    elements.sort_by_key(|e| e.ordinal);
    for element in elements {
        builder.add_constant(element.value);
    }

    builder.build()
}
