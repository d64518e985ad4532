//! Metadata records produced by the walkers.
//!
//! These are plain owned values: a header's metadata is built bottom-up in a
//! single traversal pass and never mutated afterwards. Nested declarations
//! form a tree (C++ nested types cannot cycle), and base classes are
//! references by name only - nothing is resolved across files.
//!
//! The `Serialize` shapes are the output contract: field names and array
//! order are consumed verbatim by downstream generators.

use serde::{Deserialize, Serialize};

/// Everything extracted from one header file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderMetadata {
    /// Class definitions in the target namespace, declaration order
    pub classes: Vec<ClassInfo>,

    /// Struct definitions in the target namespace, declaration order
    pub structs: Vec<ClassInfo>,

    /// Enum declarations in the target namespace, declaration order
    pub enums: Vec<EnumInfo>,
}

impl HeaderMetadata {
    /// True if the target namespace contributed nothing to this file.
    /// An empty result is expected and valid, not an error.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.structs.is_empty() && self.enums.is_empty()
    }

    /// Total number of type records, including nested ones
    pub fn type_count(&self) -> usize {
        self.classes
            .iter()
            .chain(self.structs.iter())
            .map(ClassInfo::type_count)
            .sum::<usize>()
            + self.enums.len()
    }
}

/// A class, struct or nested type declaration.
///
/// `structs` holds nested struct *definitions*; `classes` holds nested class
/// *forward declarations*. A fully defined nested class is recorded in
/// neither list - see the classifier notes in [`crate::walker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Declared name. Empty for anonymous declarations.
    pub name: String,

    /// Member functions, declaration order
    pub methods: Vec<MethodInfo>,

    /// Type spellings of direct bases, declaration order
    pub base_classes: Vec<String>,

    /// Nested enum declarations
    pub enums: Vec<EnumInfo>,

    /// Nested struct definitions
    pub structs: Vec<ClassInfo>,

    /// Nested class forward declarations
    pub classes: Vec<ClassInfo>,
}

impl ClassInfo {
    /// Create an empty record for a type with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            base_classes: Vec::new(),
            enums: Vec::new(),
            structs: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Number of type records rooted here, including this one
    pub fn type_count(&self) -> usize {
        1 + self.enums.len()
            + self
                .structs
                .iter()
                .chain(self.classes.iter())
                .map(ClassInfo::type_count)
                .sum::<usize>()
    }
}

/// One member function: ordinary method, operator, constructor or destructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Method name as declared (operators keep their `operator` spelling)
    pub name: String,

    /// Return type spelling; `void` for constructors and destructors
    pub return_type: String,

    /// Parameters in declaration order
    pub arguments: Vec<Argument>,

    /// Declared `virtual`
    pub is_virtual: bool,

    /// Declared `static`
    pub is_static: bool,

    /// This entry is a constructor
    pub is_constructor: bool,

    /// This entry is a destructor
    pub is_destructor: bool,
}

/// One method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Parameter name; empty when the declaration omits it
    pub name: String,

    /// Parameter type spelling
    #[serde(rename = "type")]
    pub type_spelling: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, type_spelling: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_spelling: type_spelling.into(),
        }
    }
}

/// An enum declaration with its resolved enumerator values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    /// Declared name. Empty for anonymous enums.
    pub name: String,

    /// Enumerators in declaration order. Duplicate names, if the source
    /// declares them, are preserved verbatim.
    pub values: Vec<EnumValue>,
}

impl EnumInfo {
    /// Create an empty record for an enum with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

/// One enumerator: name and resolved integral value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Enumerator name
    pub name: String,

    /// Resolved value: explicit initializers and implicit increments both
    /// arrive here as final integers
    pub value: i64,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metadata() {
        let meta = HeaderMetadata::default();
        assert!(meta.is_empty());
        assert_eq!(meta.type_count(), 0);
    }

    #[test]
    fn test_type_count_nested() {
        let mut inner = ClassInfo::new("Inner");
        inner.enums.push(EnumInfo::new("Mode"));

        let mut outer = ClassInfo::new("Outer");
        outer.structs.push(inner);

        let meta = HeaderMetadata {
            classes: vec![outer],
            structs: Vec::new(),
            enums: vec![EnumInfo::new("Flags")],
        };

        // Outer + Inner + Mode + Flags
        assert_eq!(meta.type_count(), 4);
        assert!(!meta.is_empty());
    }

    #[test]
    fn test_argument_serializes_type_key() {
        let arg = Argument::new("p_name", "const String &");
        let json = serde_json::to_value(&arg).unwrap();
        assert_eq!(json["name"], "p_name");
        assert_eq!(json["type"], "const String &");
    }

    #[test]
    fn test_method_info_field_names() {
        let method = MethodInfo {
            name: "get_name".to_string(),
            return_type: "String".to_string(),
            arguments: Vec::new(),
            is_virtual: true,
            is_static: false,
            is_constructor: false,
            is_destructor: false,
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["is_virtual"], true);
        assert_eq!(json["is_static"], false);
        assert_eq!(json["return_type"], "String");
    }
}
