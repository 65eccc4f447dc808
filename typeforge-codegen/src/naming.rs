//! Identifier conversion and reserved-word handling.

/// Java reserved words plus the literals that cannot be identifiers.
const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Suffix applied to field identifiers that collide with a reserved word.
pub const KEYWORD_SUFFIX: &str = "$$";

/// Returns true if the name is a target-language reserved word.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}

/// Derives the internal field identifier for an attribute name.
///
/// A reserved-word collision gets a fixed disambiguating suffix; accessor
/// names are always derived from the original name, so the collision is
/// invisible at the public surface.
#[must_use]
pub fn field_identifier(name: &str) -> String {
    if is_reserved_word(name) {
        format!("{name}{KEYWORD_SUFFIX}")
    } else {
        name.to_string()
    }
}

/// Converts a type name into a generated class name.
///
/// The first letter is upper-cased; any run of non-alphanumeric characters
/// is dropped and the following character upper-cased, so `hive_db`
/// becomes `HiveDb`.
#[must_use]
pub fn to_class_name(type_name: &str) -> String {
    let mut result = String::with_capacity(type_name.len());
    let mut capitalize_next = true;

    for c in type_name.chars() {
        if c.is_ascii_alphanumeric() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else {
            capitalize_next = true;
        }
    }

    result
}

/// Upper-cases the first character of a name.
#[must_use]
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_sorted() {
        // binary_search relies on the table staying sorted
        let mut sorted = RESERVED_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_WORDS);
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("while"));
        assert!(is_reserved_word("null"));
        assert!(!is_reserved_word("hostname"));
        assert!(!is_reserved_word(""));
    }

    #[test]
    fn test_field_identifier() {
        assert_eq!(field_identifier("class"), "class$$");
        assert_eq!(field_identifier("hostname"), "hostname");
    }

    #[test]
    fn test_to_class_name() {
        assert_eq!(to_class_name("hive_db"), "HiveDb");
        assert_eq!(to_class_name("asset"), "Asset");
        assert_eq!(to_class_name("AlreadyUpper"), "AlreadyUpper");
        assert_eq!(to_class_name("data-set_v2"), "DataSetV2");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("guid"), "Guid");
        assert_eq!(capitalize_first(""), "");
    }
}
