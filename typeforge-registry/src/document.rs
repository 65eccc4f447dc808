//! Type-definition document loading.
//!
//! A document is a JSON file carrying four optional sections, one per type
//! kind. Documents are loaded up front and merged into one registry before
//! generation starts; a malformed or unreadable document is fatal at load
//! time.

use crate::error::RegistryError;
use crate::types::{AttributeDef, EnumElementDef, TypeDef, TypeKind};
use serde::Deserialize;
use std::path::Path;

/// One parsed type-definition document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypesDocument {
    /// Enum definitions.
    #[serde(rename = "enumDefs", default)]
    pub enum_defs: Vec<EnumDocDef>,
    /// Struct definitions.
    #[serde(rename = "structDefs", default)]
    pub struct_defs: Vec<StructDocDef>,
    /// Classification definitions.
    #[serde(rename = "classificationDefs", default)]
    pub classification_defs: Vec<CompositeDocDef>,
    /// Entity definitions.
    #[serde(rename = "entityDefs", default)]
    pub entity_defs: Vec<CompositeDocDef>,
}

impl TypesDocument {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    /// Returns `RegistryError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a document from a file.
    ///
    /// # Errors
    /// Returns `RegistryError::Io` if the file cannot be read and
    /// `RegistryError::Json` if its content is malformed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the total number of definitions across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enum_defs.len()
            + self.struct_defs.len()
            + self.classification_defs.len()
            + self.entity_defs.len()
    }

    /// Returns true if the document carries no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Enum definition as it appears in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDocDef {
    /// Type name.
    pub name: String,
    /// Elements with explicit ordinals.
    #[serde(rename = "elementDefs", default)]
    pub element_defs: Vec<EnumElementDef>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Model version string.
    #[serde(rename = "typeVersion", default)]
    pub type_version: Option<String>,
}

impl EnumDocDef {
    /// Converts the document form into a registry [`TypeDef`].
    #[must_use]
    pub fn into_type_def(self) -> TypeDef {
        TypeDef {
            name: self.name,
            kind: TypeKind::Enum,
            super_types: Vec::new(),
            attributes: Vec::new(),
            elements: self.element_defs,
            description: self.description,
            type_version: self.type_version,
        }
    }
}

/// Struct definition as it appears in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct StructDocDef {
    /// Type name.
    pub name: String,
    /// Declared attributes.
    #[serde(rename = "attributeDefs", default)]
    pub attribute_defs: Vec<AttributeDef>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Model version string.
    #[serde(rename = "typeVersion", default)]
    pub type_version: Option<String>,
}

impl StructDocDef {
    /// Converts the document form into a registry [`TypeDef`].
    #[must_use]
    pub fn into_type_def(self) -> TypeDef {
        TypeDef {
            name: self.name,
            kind: TypeKind::Struct,
            super_types: Vec::new(),
            attributes: self.attribute_defs,
            elements: Vec::new(),
            description: self.description,
            type_version: self.type_version,
        }
    }
}

/// Entity or classification definition as it appears in a document.
///
/// The two kinds share a shape; the section they appear in decides the
/// [`TypeKind`].
#[derive(Debug, Clone, Deserialize)]
pub struct CompositeDocDef {
    /// Type name.
    pub name: String,
    /// Direct supertype names.
    #[serde(rename = "superTypes", default)]
    pub super_types: Vec<String>,
    /// Declared attributes.
    #[serde(rename = "attributeDefs", default)]
    pub attribute_defs: Vec<AttributeDef>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Model version string.
    #[serde(rename = "typeVersion", default)]
    pub type_version: Option<String>,
}

impl CompositeDocDef {
    /// Converts the document form into a registry [`TypeDef`].
    #[must_use]
    pub fn into_type_def(self, kind: TypeKind) -> TypeDef {
        TypeDef {
            name: self.name,
            kind,
            super_types: self.super_types,
            attributes: self.attribute_defs,
            elements: Vec::new(),
            description: self.description,
            type_version: self.type_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cardinality;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "enumDefs": [
            {
                "name": "status",
                "elementDefs": [
                    {"value": "ACTIVE", "ordinal": 0},
                    {"value": "DELETED", "ordinal": 1}
                ]
            }
        ],
        "structDefs": [
            {
                "name": "address",
                "attributeDefs": [
                    {"name": "street", "typeName": "string"},
                    {"name": "ports", "typeName": "array<int>", "cardinality": "LIST"}
                ]
            }
        ],
        "classificationDefs": [
            {"name": "pii", "superTypes": []}
        ],
        "entityDefs": [
            {
                "name": "server",
                "superTypes": ["asset"],
                "attributeDefs": [{"name": "hostname", "typeName": "string"}]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let doc = TypesDocument::from_json(SAMPLE).expect("parse");
        assert_eq!(doc.enum_defs.len(), 1);
        assert_eq!(doc.struct_defs.len(), 1);
        assert_eq!(doc.classification_defs.len(), 1);
        assert_eq!(doc.entity_defs.len(), 1);
        assert_eq!(doc.len(), 4);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let doc = TypesDocument::from_json("{}").expect("parse");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(TypesDocument::from_json("{not json").is_err());
        assert!(TypesDocument::from_json(r#"{"enumDefs": 42}"#).is_err());
    }

    #[test]
    fn test_cardinality_aliases() {
        let doc = TypesDocument::from_json(SAMPLE).expect("parse");
        let attrs = &doc.struct_defs[0].attribute_defs;
        assert_eq!(attrs[0].cardinality, Cardinality::Single);
        assert_eq!(attrs[1].cardinality, Cardinality::List);
    }

    #[test]
    fn test_into_type_def() {
        let doc = TypesDocument::from_json(SAMPLE).expect("parse");

        let enum_def = doc.enum_defs[0].clone().into_type_def();
        assert_eq!(enum_def.kind, TypeKind::Enum);
        assert_eq!(enum_def.elements.len(), 2);

        let entity_def = doc.entity_defs[0].clone().into_type_def(TypeKind::Entity);
        assert_eq!(entity_def.kind, TypeKind::Entity);
        assert_eq!(entity_def.super_types, vec!["asset".to_string()]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");

        let doc = TypesDocument::from_file(file.path()).expect("load");
        assert_eq!(doc.len(), 4);

        assert!(TypesDocument::from_file(Path::new("/nonexistent/model.json")).is_err());
    }
}
