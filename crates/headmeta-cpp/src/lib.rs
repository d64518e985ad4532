//! C++ front-end for headmeta
//!
//! Wraps `tree-sitter` / `tree-sitter-cpp` behind the capability interface
//! from `headmeta-frontend-api`. The adapter normalizes the grammar's
//! concrete shapes into the declaration vocabulary the walkers consume:
//! base-class clauses expand into one base-specifier node per base type,
//! method declarations and inline definitions both surface as method-like
//! nodes, constructors and destructors are classified from the declarator,
//! and enumerator values are resolved to final integers.
//!
//! # Example
//!
//! ```rust
//! use headmeta::{walk_header, ScanConfig};
//! use headmeta_cpp::CppFrontend;
//! use headmeta_frontend_api::{Frontend, TranslationUnit};
//! use std::path::Path;
//!
//! let frontend = CppFrontend::new().unwrap();
//! let source = r#"
//!     namespace godot {
//!     class Node : public Object {
//!     public:
//!         void set_name(const String &p_name);
//!     };
//!     }
//! "#;
//!
//! let unit = frontend.parse_source(source, Path::new("node.hpp")).unwrap();
//! let meta = walk_header(&unit.top_level(), &ScanConfig::new("godot"));
//! assert_eq!(meta.classes[0].name, "Node");
//! ```

mod cursor;
mod eval;
mod frontend;

pub use cursor::CppCursor;
pub use frontend::{CppFrontend, CppTranslationUnit};
