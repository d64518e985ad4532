//! headmeta front-end API
//!
//! Shared traits and types for plugging a C/C++ front-end into headmeta.
//!
//! The metadata walkers in the `headmeta` crate never touch a concrete
//! parsing library. They consume declarations through a minimal capability
//! interface defined here:
//!
//! - **[`Frontend`]**: constructs translation units from files or source text
//! - **[`TranslationUnit`]**: owns one parsed file and hands out its
//!   top-level declarations
//! - **[`SourceNode`]**: one declaration - kind, spelling, flags, children
//! - **[`DeclKind`]**: the classification the walkers dispatch on
//!
//! A front-end adapter (such as `headmeta-cpp`) is responsible for mapping
//! its library's concrete syntax tree onto these traits, including any
//! normalization the grammar requires (expanding base-class clauses,
//! resolving enumerator values, classifying constructors and destructors).

pub mod errors;
pub mod kind;
pub mod traits;

pub use errors::{FrontendError, FrontendResult};
pub use kind::DeclKind;
pub use traits::{Frontend, SourceNode, TranslationUnit};
