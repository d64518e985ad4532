//! JSON encoding of the file -> metadata mapping.
//!
//! Output is a single document keyed by relative path (forward slashes),
//! indented with four spaces. Keys come from an ordered map, so an
//! unchanged input tree always produces byte-identical output.

use crate::error::{Result, ScanError};
use crate::schema::HeaderMetadata;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::path::Path;

/// Encode the mapping as a pretty-printed JSON string.
pub fn to_json_string(files: &BTreeMap<String, HeaderMetadata>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    files.serialize(&mut serializer)?;

    // serde_json always emits valid UTF-8
    Ok(String::from_utf8(buf).expect("serializer produced invalid UTF-8"))
}

/// Encode the mapping and write it to `path`.
pub fn write_json_file(files: &BTreeMap<String, HeaderMetadata>, path: &Path) -> Result<()> {
    let json = to_json_string(files)?;
    std::fs::write(path, json).map_err(|e| ScanError::output(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ClassInfo, EnumInfo, EnumValue};

    #[test]
    fn test_empty_metadata_shape() {
        let mut files = BTreeMap::new();
        files.insert("empty.hpp".to_string(), HeaderMetadata::default());

        let json = to_json_string(&files).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["empty.hpp"]["classes"], serde_json::json!([]));
        assert_eq!(value["empty.hpp"]["structs"], serde_json::json!([]));
        assert_eq!(value["empty.hpp"]["enums"], serde_json::json!([]));
    }

    #[test]
    fn test_four_space_indentation() {
        let mut files = BTreeMap::new();
        files.insert("a.hpp".to_string(), HeaderMetadata::default());

        let json = to_json_string(&files).unwrap();
        assert!(json.contains("\n    \"a.hpp\""));
        assert!(json.contains("\n        \"classes\""));
    }

    #[test]
    fn test_keys_sorted_and_stable() {
        let mut files = BTreeMap::new();
        files.insert("b/z.hpp".to_string(), HeaderMetadata::default());
        files.insert("a/y.hpp".to_string(), HeaderMetadata::default());

        let first = to_json_string(&files).unwrap();
        let second = to_json_string(&files).unwrap();
        assert_eq!(first, second);
        assert!(first.find("a/y.hpp").unwrap() < first.find("b/z.hpp").unwrap());
    }

    #[test]
    fn test_nested_records_roundtrip() {
        let mut class = ClassInfo::new("Node");
        class.base_classes.push("Object".to_string());
        class.enums.push(EnumInfo {
            name: "ProcessMode".to_string(),
            values: vec![EnumValue::new("PROCESS_MODE_INHERIT", 0)],
        });

        let mut files = BTreeMap::new();
        files.insert(
            "classes/node.hpp".to_string(),
            HeaderMetadata {
                classes: vec![class],
                structs: Vec::new(),
                enums: Vec::new(),
            },
        );

        let json = to_json_string(&files).unwrap();
        let parsed: BTreeMap<String, HeaderMetadata> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, files);
    }
}
