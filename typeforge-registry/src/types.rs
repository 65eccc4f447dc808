//! Type-definition data model.
//!
//! This module contains the data structures describing one generation run's
//! type universe: enums, structs, classifications, and entities, together
//! with their attributes and the closed set of attribute type references.

use crate::error::RegistryError;
use serde::Deserialize;

/// Kind of a registered type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Enumeration of named constants.
    Enum,
    /// Plain composite type without inheritance.
    Struct,
    /// Mixin type attachable to entities; participates in inheritance.
    Classification,
    /// Entity type; participates in inheritance.
    Entity,
}

impl TypeKind {
    /// Returns the lowercase display name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Classification => "classification",
            Self::Entity => "entity",
        }
    }
}

/// How many values an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    #[serde(alias = "SINGLE", alias = "single")]
    Single,
    /// An ordered list of values.
    #[serde(alias = "LIST", alias = "list")]
    List,
    /// An unordered set of unique values.
    #[serde(alias = "SET", alias = "set")]
    Set,
}

/// Built-in scalar attribute types (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean value.
    Boolean,
    /// 8-bit integer.
    Byte,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// 64-bit floating point.
    Double,
    /// Arbitrary-precision integer.
    BigInteger,
    /// Arbitrary-precision decimal.
    BigDecimal,
    /// Point-in-time value.
    Date,
    /// Text value.
    String,
}

impl ScalarKind {
    /// Parses a scalar kind from its type-definition name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "double" => Some(Self::Double),
            "biginteger" => Some(Self::BigInteger),
            "bigdecimal" => Some(Self::BigDecimal),
            "date" => Some(Self::Date),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the type-definition name for this scalar.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Double => "double",
            Self::BigInteger => "biginteger",
            Self::BigDecimal => "bigdecimal",
            Self::Date => "date",
            Self::String => "string",
        }
    }
}

/// Attribute type reference (closed tagged variant).
///
/// Parsed from a type-name string in a definition document:
/// `array<T>` and `map<K,V>` nest recursively, the built-in scalar names
/// resolve to [`ScalarKind`], and anything else is a reference to a named
/// type that must be resolvable in the registry at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrTypeRef {
    /// Built-in scalar type.
    Scalar(ScalarKind),
    /// Ordered collection of an element type: `array<T>`.
    Array(Box<AttrTypeRef>),
    /// Key/value mapping: `map<K,V>`.
    Map(Box<AttrTypeRef>, Box<AttrTypeRef>),
    /// Reference to a named enum/struct/classification/entity.
    Named(String),
}

impl AttrTypeRef {
    /// Parses a type reference from its document string form.
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidTypeRef` on malformed `array<...>` /
    /// `map<...>` syntax.
    pub fn parse(attribute: &str, type_name: &str) -> Result<Self, RegistryError> {
        let trimmed = type_name.trim();

        if let Some(inner) = strip_wrapper(trimmed, "array") {
            return Ok(Self::Array(Box::new(Self::parse(attribute, inner)?)));
        }

        if let Some(inner) = strip_wrapper(trimmed, "map") {
            let (key, value) = split_map_args(inner)
                .ok_or_else(|| RegistryError::invalid_type_ref(attribute, type_name))?;
            return Ok(Self::Map(
                Box::new(Self::parse(attribute, key)?),
                Box::new(Self::parse(attribute, value)?),
            ));
        }

        if trimmed.is_empty() || trimmed.contains('<') || trimmed.contains('>') {
            return Err(RegistryError::invalid_type_ref(attribute, type_name));
        }

        if let Some(scalar) = ScalarKind::from_type_name(trimmed) {
            return Ok(Self::Scalar(scalar));
        }

        Ok(Self::Named(trimmed.to_string()))
    }

    /// Returns true if this is a reference to a named type.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// Strips `wrapper<...>` and returns the inner argument string.
fn strip_wrapper<'a>(s: &'a str, wrapper: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(wrapper)?.trim_start();
    let inner = rest.strip_prefix('<')?;
    inner.strip_suffix('>').map(str::trim)
}

/// Splits `K,V` at the top-level comma, honoring nested angle brackets.
fn split_map_args(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (idx, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => return Some((s[..idx].trim(), s[idx + 1..].trim())),
            _ => {}
        }
    }
    None
}

/// One declared attribute of a struct/classification/entity definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeDef {
    /// Attribute name.
    pub name: String,
    /// Type-name string, resolved lazily via [`AttrTypeRef::parse`].
    #[serde(rename = "typeName")]
    pub type_name: String,
    /// Value cardinality.
    #[serde(default)]
    pub cardinality: Cardinality,
}

impl AttributeDef {
    /// Creates a new attribute definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            cardinality: Cardinality::Single,
        }
    }

    /// Sets the cardinality and returns self.
    #[must_use]
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Parses this attribute's type reference.
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidTypeRef` when the type string is
    /// malformed.
    pub fn type_ref(&self) -> Result<AttrTypeRef, RegistryError> {
        AttrTypeRef::parse(&self.name, &self.type_name)
    }
}

/// One element of an enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumElementDef {
    /// Constant value name.
    pub value: String,
    /// Explicit ordinal controlling emission order.
    #[serde(default)]
    pub ordinal: i32,
    /// Element description.
    #[serde(default)]
    pub description: Option<String>,
}

impl EnumElementDef {
    /// Creates a new enum element.
    #[must_use]
    pub fn new(value: impl Into<String>, ordinal: i32) -> Self {
        Self {
            value: value.into(),
            ordinal,
            description: None,
        }
    }
}

/// A registered type definition.
///
/// Immutable once handed to the registry. Supertypes are only meaningful
/// for entities and classifications; elements only for enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// Unique type name.
    pub name: String,
    /// Kind of the definition.
    pub kind: TypeKind,
    /// Names of direct supertypes (entities/classifications only).
    pub super_types: Vec<String>,
    /// Declared attributes in document order.
    pub attributes: Vec<AttributeDef>,
    /// Enum elements (enums only).
    pub elements: Vec<EnumElementDef>,
    /// Description.
    pub description: Option<String>,
    /// Model version string.
    pub type_version: Option<String>,
}

impl TypeDef {
    /// Creates an empty definition of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            super_types: Vec::new(),
            attributes: Vec::new(),
            elements: Vec::new(),
            description: None,
            type_version: None,
        }
    }

    /// Adds a supertype name and returns self.
    #[must_use]
    pub fn with_super_type(mut self, name: impl Into<String>) -> Self {
        self.super_types.push(name.into());
        self
    }

    /// Adds an attribute and returns self.
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds an enum element and returns self.
    #[must_use]
    pub fn with_element(mut self, element: EnumElementDef) -> Self {
        self.elements.push(element);
        self
    }

    /// Returns true if this type declares no supertypes.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.super_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_round_trip() {
        for name in [
            "boolean",
            "byte",
            "short",
            "int",
            "long",
            "double",
            "biginteger",
            "bigdecimal",
            "date",
            "string",
        ] {
            let kind = ScalarKind::from_type_name(name).expect("known scalar");
            assert_eq!(kind.type_name(), name);
        }
        assert_eq!(ScalarKind::from_type_name("float"), None);
        assert_eq!(ScalarKind::from_type_name("unknown"), None);
    }

    #[test]
    fn test_parse_scalar_ref() {
        let parsed = AttrTypeRef::parse("qualifiedName", "string").expect("parse");
        assert_eq!(parsed, AttrTypeRef::Scalar(ScalarKind::String));
    }

    #[test]
    fn test_parse_named_ref() {
        let parsed = AttrTypeRef::parse("db", "hive_db").expect("parse");
        assert_eq!(parsed, AttrTypeRef::Named("hive_db".to_string()));
        assert!(parsed.is_named());
    }

    #[test]
    fn test_parse_array_ref() {
        let parsed = AttrTypeRef::parse("columns", "array<hive_column>").expect("parse");
        assert_eq!(
            parsed,
            AttrTypeRef::Array(Box::new(AttrTypeRef::Named("hive_column".to_string())))
        );
    }

    #[test]
    fn test_parse_map_ref() {
        let parsed = AttrTypeRef::parse("parameters", "map<string,string>").expect("parse");
        assert_eq!(
            parsed,
            AttrTypeRef::Map(
                Box::new(AttrTypeRef::Scalar(ScalarKind::String)),
                Box::new(AttrTypeRef::Scalar(ScalarKind::String)),
            )
        );
    }

    #[test]
    fn test_parse_nested_map_ref() {
        let parsed = AttrTypeRef::parse("index", "map<string,array<long>>").expect("parse");
        match parsed {
            AttrTypeRef::Map(key, value) => {
                assert_eq!(*key, AttrTypeRef::Scalar(ScalarKind::String));
                assert_eq!(
                    *value,
                    AttrTypeRef::Array(Box::new(AttrTypeRef::Scalar(ScalarKind::Long)))
                );
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_ref() {
        assert!(AttrTypeRef::parse("a", "array<").is_err());
        assert!(AttrTypeRef::parse("a", "map<string>").is_err());
        assert!(AttrTypeRef::parse("a", "").is_err());
        assert!(AttrTypeRef::parse("a", "foo<bar>").is_err());
    }

    #[test]
    fn test_attribute_def_type_ref() {
        let attr = AttributeDef::new("ports", "array<int>").with_cardinality(Cardinality::List);
        let parsed = attr.type_ref().expect("parse");
        assert_eq!(
            parsed,
            AttrTypeRef::Array(Box::new(AttrTypeRef::Scalar(ScalarKind::Int)))
        );
        assert_eq!(attr.cardinality, Cardinality::List);
    }

    #[test]
    fn test_type_def_builders() {
        let def = TypeDef::new("server", TypeKind::Entity)
            .with_super_type("asset")
            .with_attribute(AttributeDef::new("hostname", "string"));
        assert_eq!(def.kind, TypeKind::Entity);
        assert!(!def.is_root());
        assert_eq!(def.attributes.len(), 1);

        let root = TypeDef::new("asset", TypeKind::Entity);
        assert!(root.is_root());
    }

    #[test]
    fn test_cardinality_default() {
        assert_eq!(Cardinality::default(), Cardinality::Single);
    }

    #[test]
    fn test_type_kind_as_str() {
        assert_eq!(TypeKind::Enum.as_str(), "enum");
        assert_eq!(TypeKind::Classification.as_str(), "classification");
    }
}
