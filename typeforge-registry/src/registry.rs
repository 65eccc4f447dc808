//! The type registry: a read-only catalog of all definitions for one run.

use crate::document::TypesDocument;
use crate::types::{TypeDef, TypeKind};
use std::collections::HashMap;

/// Catalog of every type definition participating in a generation run.
///
/// Definitions are kept in insertion order per kind; a second registration
/// under the same name replaces the first (last-write-wins across merged
/// documents). The registry is populated up front and only read during
/// generation.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDef>,
    name_index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any existing one with the same name.
    pub fn register(&mut self, type_def: TypeDef) {
        let name = type_def.name.clone();
        if let Some(&idx) = self.name_index.get(&name) {
            tracing::warn!("type '{}' redefined, replacing earlier definition", name);
            self.types[idx] = type_def;
        } else {
            self.name_index.insert(name, self.types.len());
            self.types.push(type_def);
        }
    }

    /// Merges every definition of a document into this registry.
    pub fn add_document(&mut self, document: TypesDocument) {
        for def in document.enum_defs {
            self.register(def.into_type_def());
        }
        for def in document.struct_defs {
            self.register(def.into_type_def());
        }
        for def in document.classification_defs {
            self.register(def.into_type_def(TypeKind::Classification));
        }
        for def in document.entity_defs {
            self.register(def.into_type_def(TypeKind::Entity));
        }
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.name_index.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Returns all definitions of one kind in registration order.
    pub fn defs_of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &TypeDef> {
        self.types.iter().filter(move |def| def.kind == kind)
    }

    /// Returns all enum definitions in registration order.
    pub fn enum_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.defs_of_kind(TypeKind::Enum)
    }

    /// Returns all struct definitions in registration order.
    pub fn struct_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.defs_of_kind(TypeKind::Struct)
    }

    /// Returns all classification definitions in registration order.
    pub fn classification_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.defs_of_kind(TypeKind::Classification)
    }

    /// Returns all entity definitions in registration order.
    pub fn entity_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.defs_of_kind(TypeKind::Entity)
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttributeDef;

    #[test]
    fn test_register_and_get() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDef::new("asset", TypeKind::Entity));

        assert!(registry.contains("asset"));
        assert!(!registry.contains("unknown"));
        assert_eq!(registry.get("asset").map(|d| d.kind), Some(TypeKind::Entity));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDef::new("asset", TypeKind::Entity));
        registry.register(
            TypeDef::new("asset", TypeKind::Entity)
                .with_attribute(AttributeDef::new("name", "string")),
        );

        assert_eq!(registry.len(), 1);
        let def = registry.get("asset").expect("present");
        assert_eq!(def.attributes.len(), 1);
    }

    #[test]
    fn test_defs_of_kind_preserve_order() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDef::new("b_entity", TypeKind::Entity));
        registry.register(TypeDef::new("status", TypeKind::Enum));
        registry.register(TypeDef::new("a_entity", TypeKind::Entity));

        let names: Vec<_> = registry.entity_defs().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b_entity", "a_entity"]);
        assert_eq!(registry.enum_defs().count(), 1);
        assert_eq!(registry.struct_defs().count(), 0);
    }

    #[test]
    fn test_add_document() {
        let json = r#"{
            "structDefs": [{"name": "address"}],
            "entityDefs": [{"name": "server", "superTypes": ["asset"]}]
        }"#;
        let document = crate::document::TypesDocument::from_json(json).expect("parse");

        let mut registry = TypeRegistry::new();
        registry.add_document(document);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("server").map(|d| d.kind),
            Some(TypeKind::Entity)
        );
        assert_eq!(
            registry.get("address").map(|d| d.kind),
            Some(TypeKind::Struct)
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
