//! Language-neutral class models.
//!
//! A [`ClassModel`] describes one generated class independently of target
//! syntax: its name, ordered fields, accessor pairs, and enum constants.
//! Models are built once per source type name, cached for the run, and
//! handed to the writer after all passes complete.

use crate::naming::{capitalize_first, field_identifier};

/// Target-side scalar types (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Boolean, by value.
    Boolean,
    /// 8-bit integer, by value.
    Byte,
    /// 16-bit integer, by value.
    Short,
    /// 32-bit integer, by value.
    Int,
    /// 64-bit integer, by value.
    Long,
    /// 64-bit float, by value.
    Double,
    /// Arbitrary-precision integer value type.
    BigInteger,
    /// Arbitrary-precision decimal value type.
    BigDecimal,
    /// Point-in-time value type.
    Date,
    /// Text value type.
    String,
}

/// Target type descriptor for a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Native scalar or value type.
    Scalar(ScalarType),
    /// Ordered sequence of an element type.
    ListOf(Box<TargetType>),
    /// Unique set of an element type.
    SetOf(Box<TargetType>),
    /// Key/value mapping.
    MapOf(Box<TargetType>, Box<TargetType>),
    /// Reference to another generated class by class name.
    Object(String),
}

impl TargetType {
    /// Returns true for sequence/set/map types.
    ///
    /// Cardinality wrapping is suppressed for container types so that a
    /// `list`-cardinality `array<T>` attribute stays a single sequence.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::ListOf(_) | Self::SetOf(_) | Self::MapOf(_, _))
    }

    /// Convenience constructor for a list of the given element type.
    #[must_use]
    pub fn list_of(element: TargetType) -> Self {
        Self::ListOf(Box::new(element))
    }

    /// Convenience constructor for a set of the given element type.
    #[must_use]
    pub fn set_of(element: TargetType) -> Self {
        Self::SetOf(Box::new(element))
    }

    /// Convenience constructor for a map of the given key/value types.
    #[must_use]
    pub fn map_of(key: TargetType, value: TargetType) -> Self {
        Self::MapOf(Box::new(key), Box::new(value))
    }
}

/// One generated field: sanitized internal identifier plus target type.
///
/// Field identity for inheritance dedup is the exact `(name, ty)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Internal field identifier (keyword-sanitized).
    pub name: String,
    /// Target type of the field.
    pub ty: TargetType,
}

/// Getter/setter pair for one field.
///
/// Accessor names derive from the original attribute name, not the
/// sanitized field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorSpec {
    /// Getter method name.
    pub getter_name: String,
    /// Setter method name.
    pub setter_name: String,
    /// Field identifier the accessors read/write.
    pub field_name: String,
    /// Target type of the accessed field.
    pub ty: TargetType,
}

/// Builds a field and its accessor pair from an attribute name and type.
#[must_use]
pub fn make_member(attribute_name: &str, ty: TargetType) -> (FieldSpec, AccessorSpec) {
    let field_name = field_identifier(attribute_name);
    let capitalized = capitalize_first(attribute_name);

    let field = FieldSpec {
        name: field_name.clone(),
        ty: ty.clone(),
    };
    let accessor = AccessorSpec {
        getter_name: format!("get{capitalized}"),
        setter_name: format!("set{capitalized}"),
        field_name,
        ty,
    };

    (field, accessor)
}

/// Kind of a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Plain class with fields and accessors.
    Class,
    /// Enumeration of named constants.
    Enum,
}

/// In-memory description of one generated class.
///
/// Immutable after [`ClassModelBuilder::build`]; at most one exists per
/// source type name per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    /// Source type name the model was generated from.
    pub type_name: String,
    /// Target class name.
    pub class_name: String,
    /// Kind of the generated class.
    pub kind: ModelKind,
    /// Ordered fields.
    pub fields: Vec<FieldSpec>,
    /// Accessor pairs, parallel to `fields` (empty for enums).
    pub accessors: Vec<AccessorSpec>,
    /// Ordinal-ordered constants (enums only).
    pub constants: Vec<String>,
}

impl ClassModel {
    /// Returns true if the model declares a field with the given name.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Accumulates fields and accessors for one class model.
#[derive(Debug)]
pub struct ClassModelBuilder {
    type_name: String,
    class_name: String,
    kind: ModelKind,
    fields: Vec<FieldSpec>,
    accessors: Vec<AccessorSpec>,
    constants: Vec<String>,
}

impl ClassModelBuilder {
    /// Creates a builder for the given source type.
    #[must_use]
    pub fn new(
        type_name: impl Into<String>,
        class_name: impl Into<String>,
        kind: ModelKind,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            class_name: class_name.into(),
            kind,
            fields: Vec::new(),
            accessors: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Adds a field with its accessor pair.
    ///
    /// An exact `(name, type)` duplicate is dropped, so a field inherited
    /// through two supertype paths lands once. A same-name field with a
    /// different type replaces the earlier one together with its
    /// accessors: last merged wins.
    pub fn add_member(&mut self, field: FieldSpec, accessor: AccessorSpec) {
        match self.fields.iter().position(|f| f.name == field.name) {
            Some(idx) if self.fields[idx].ty == field.ty => {}
            Some(idx) => {
                tracing::warn!(
                    "field '{}' of {} redeclared with a different type, later declaration wins",
                    field.name,
                    self.type_name
                );
                self.fields[idx] = field;
                self.accessors[idx] = accessor;
            }
            None => {
                self.fields.push(field);
                self.accessors.push(accessor);
            }
        }
    }

    /// Adds an enum constant.
    pub fn add_constant(&mut self, value: impl Into<String>) {
        self.constants.push(value.into());
    }

    /// Finalizes the model.
    #[must_use]
    pub fn build(self) -> ClassModel {
        ClassModel {
            type_name: self.type_name,
            class_name: self.class_name,
            kind: self.kind,
            fields: self.fields,
            accessors: self.accessors,
            constants: self.constants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_container() {
        assert!(TargetType::list_of(TargetType::Scalar(ScalarType::Int)).is_container());
        assert!(
            TargetType::map_of(
                TargetType::Scalar(ScalarType::String),
                TargetType::Scalar(ScalarType::String)
            )
            .is_container()
        );
        assert!(!TargetType::Scalar(ScalarType::Long).is_container());
        assert!(!TargetType::Object("Asset".to_string()).is_container());
    }

    #[test]
    fn test_make_member_plain() {
        let (field, accessor) = make_member("hostname", TargetType::Scalar(ScalarType::String));
        assert_eq!(field.name, "hostname");
        assert_eq!(accessor.getter_name, "getHostname");
        assert_eq!(accessor.setter_name, "setHostname");
        assert_eq!(accessor.field_name, "hostname");
    }

    #[test]
    fn test_make_member_reserved_word() {
        let (field, accessor) = make_member("class", TargetType::Scalar(ScalarType::String));
        assert_eq!(field.name, "class$$");
        // accessors derive from the unmangled name
        assert_eq!(accessor.getter_name, "getClass");
        assert_eq!(accessor.setter_name, "setClass");
        assert_eq!(accessor.field_name, "class$$");
    }

    #[test]
    fn test_builder_dedups_exact_duplicates() {
        let mut builder = ClassModelBuilder::new("server", "Server", ModelKind::Class);
        let (field, accessor) = make_member("guid", TargetType::Scalar(ScalarType::String));
        builder.add_member(field.clone(), accessor.clone());
        builder.add_member(field, accessor);

        let model = builder.build();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.accessors.len(), 1);
    }

    #[test]
    fn test_builder_last_wins_on_conflicting_type() {
        let mut builder = ClassModelBuilder::new("server", "Server", ModelKind::Class);
        let (field_a, accessor_a) = make_member("port", TargetType::Scalar(ScalarType::Int));
        let (field_b, accessor_b) = make_member("port", TargetType::Scalar(ScalarType::Long));
        builder.add_member(field_a, accessor_a);
        builder.add_member(field_b, accessor_b);

        let model = builder.build();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.field("port").map(|f| f.ty.clone()), Some(TargetType::Scalar(ScalarType::Long)));
    }

    #[test]
    fn test_builder_enum_constants() {
        let mut builder = ClassModelBuilder::new("status", "Status", ModelKind::Enum);
        builder.add_constant("ACTIVE");
        builder.add_constant("DELETED");

        let model = builder.build();
        assert_eq!(model.kind, ModelKind::Enum);
        assert_eq!(model.constants, vec!["ACTIVE", "DELETED"]);
        assert!(model.fields.is_empty());
    }
}
