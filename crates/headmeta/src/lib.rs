//! headmeta
//!
//! Extracts structural metadata from C++ header files - classes, structs,
//! enums, methods and inheritance - and serializes it into a JSON schema
//! consumed by code-generation steps such as language binding generators.
//!
//! The crate is organized around a recursive declaration walker that is
//! generic over a front-end capability interface
//! ([`headmeta_frontend_api::SourceNode`]), so the traversal logic never
//! depends on a concrete parsing library:
//!
//! - [`schema`]: the metadata records ([`HeaderMetadata`], [`ClassInfo`],
//!   [`MethodInfo`], [`EnumInfo`]) and their JSON shapes
//! - [`walker`]: the declaration classifier and the class/struct, enum and
//!   header walkers
//! - [`discovery`]: recursive header enumeration with exclusion prefixes
//! - [`scanner`]: the per-file driver accumulating the path -> metadata map
//! - [`export`]: JSON encoding of a finished scan
//!
//! # Example
//!
//! ```rust,ignore
//! use headmeta::{ScanConfig, Scanner};
//! use headmeta_cpp::CppFrontend;
//! use std::path::Path;
//!
//! let frontend = CppFrontend::new()?;
//! let config = ScanConfig::new("godot");
//! let scanner = Scanner::new(frontend, config);
//!
//! let report = scanner.scan_directory(Path::new("gen/include"))?;
//! let json = headmeta::export::to_json_string(&report.files)?;
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod schema;
pub mod scanner;
pub mod walker;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use schema::{Argument, ClassInfo, EnumInfo, EnumValue, HeaderMetadata, MethodInfo};
pub use scanner::{ScanReport, Scanner};
pub use walker::{walk_class, walk_enum, walk_header};
