//! Java rendering backend.
//!
//! Renders finished class models into Java source text. The model itself
//! is target-language neutral; syntax concerns such as boxing scalar type
//! arguments inside generics live here.

use crate::model::{ClassModel, ModelKind, ScalarType, TargetType};

/// Renders one class model into target-language source text.
pub trait Backend {
    /// Renders the model as one complete type definition.
    fn render(&self, model: &ClassModel) -> String;
}

/// Backend emitting Java classes and enums.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaBackend;

impl JavaBackend {
    /// Creates a Java backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_enum(model: &ClassModel) -> String {
        let mut output = String::new();

        output.push_str(&format!("public enum {} {{\n", model.class_name));
        for (idx, constant) in model.constants.iter().enumerate() {
            let separator = if idx + 1 < model.constants.len() {
                ","
            } else {
                ""
            };
            output.push_str(&format!("    {constant}{separator}\n"));
        }
        output.push_str("}\n");

        output
    }

    fn render_class(model: &ClassModel) -> String {
        let mut output = String::new();

        output.push_str(&format!("public class {} {{\n", model.class_name));

        for field in &model.fields {
            output.push_str(&format!(
                "    private {} {};\n",
                java_type(&field.ty, false),
                field.name
            ));
        }

        for accessor in &model.accessors {
            let ty = java_type(&accessor.ty, false);

            output.push('\n');
            output.push_str(&format!(
                "    public {} {}() {{\n",
                ty, accessor.getter_name
            ));
            output.push_str(&format!("        return {};\n", accessor.field_name));
            output.push_str("    }\n");

            output.push('\n');
            output.push_str(&format!(
                "    public void {}({} {}) {{\n",
                accessor.setter_name, ty, accessor.field_name
            ));
            output.push_str(&format!(
                "        this.{} = {};\n",
                accessor.field_name, accessor.field_name
            ));
            output.push_str("    }\n");
        }

        output.push_str("}\n");
        output
    }
}

impl Backend for JavaBackend {
    fn render(&self, model: &ClassModel) -> String {
        match model.kind {
            ModelKind::Enum => Self::render_enum(model),
            ModelKind::Class => Self::render_class(model),
        }
    }
}

/// Renders a target type as Java syntax.
///
/// `boxed` forces primitive scalars to their boxed forms; it is set for
/// generic type arguments.
fn java_type(ty: &TargetType, boxed: bool) -> String {
    match ty {
        TargetType::Scalar(scalar) => {
            let name = if boxed {
                boxed_scalar(*scalar)
            } else {
                plain_scalar(*scalar)
            };
            name.to_string()
        }
        TargetType::ListOf(element) => format!("List<{}>", java_type(element, true)),
        TargetType::SetOf(element) => format!("Set<{}>", java_type(element, true)),
        TargetType::MapOf(key, value) => {
            format!("Map<{}, {}>", java_type(key, true), java_type(value, true))
        }
        TargetType::Object(class_name) => class_name.clone(),
    }
}

const fn plain_scalar(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Boolean => "boolean",
        ScalarType::Byte => "byte",
        ScalarType::Short => "short",
        ScalarType::Int => "int",
        ScalarType::Long => "long",
        ScalarType::Double => "double",
        ScalarType::BigInteger => "BigInteger",
        ScalarType::BigDecimal => "BigDecimal",
        ScalarType::Date => "Date",
        ScalarType::String => "String",
    }
}

const fn boxed_scalar(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Boolean => "Boolean",
        ScalarType::Byte => "Byte",
        ScalarType::Short => "Short",
        ScalarType::Int => "Integer",
        ScalarType::Long => "Long",
        ScalarType::Double => "Double",
        ScalarType::BigInteger => "BigInteger",
        ScalarType::BigDecimal => "BigDecimal",
        ScalarType::Date => "Date",
        ScalarType::String => "String",
    }
}
