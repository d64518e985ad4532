use crate::errors::FrontendResult;
use crate::kind::DeclKind;
use std::path::Path;

/// One declaration in a parsed translation unit.
///
/// Implementations are lightweight handles into the front-end's in-memory
/// tree; `children()` and `arguments()` materialize fresh handles on each
/// call. The walkers only ever iterate direct children once, so no caching
/// is expected of the implementation.
pub trait SourceNode: Sized {
    /// Declaration kind this node was classified as
    fn kind(&self) -> DeclKind;

    /// The declared name. Empty for anonymous declarations.
    fn spelling(&self) -> String;

    /// The spelling of this node's type. For a [`DeclKind::BaseSpecifier`]
    /// this is the referenced base class type, as reported by the front-end.
    fn type_spelling(&self) -> String;

    /// The return type spelling of a method-like node. Front-ends report
    /// `void` for constructors and destructors.
    fn result_type_spelling(&self) -> String;

    /// Whether this node is a full definition at this scope, as opposed to
    /// a forward declaration.
    fn is_definition(&self) -> bool;

    /// Whether a method-like node is declared `virtual`
    fn is_virtual_method(&self) -> bool;

    /// Whether a method-like node is declared `static`
    fn is_static_method(&self) -> bool;

    /// Direct children of this declaration scope, in source order
    fn children(&self) -> Vec<Self>;

    /// `(name, type spelling)` pairs for the parameters of a method-like
    /// node, in declaration order. Unnamed parameters keep an empty name.
    fn arguments(&self) -> Vec<(String, String)>;

    /// The resolved integral value of a [`DeclKind::EnumConstant`] node.
    /// Implicit increments and explicit initializers both resolve to the
    /// final value.
    fn enum_value(&self) -> i64;
}

/// One parsed source file.
///
/// Owns the front-end's tree for the file; nodes borrow from it.
pub trait TranslationUnit {
    /// Node handle type, borrowing from this unit
    type Node<'a>: SourceNode
    where
        Self: 'a;

    /// Top-level declarations of the file, in source order
    fn top_level(&self) -> Vec<Self::Node<'_>>;
}

/// A configured C/C++ front-end.
///
/// Construction validates the underlying parsing library; a misconfigured
/// front-end fails at startup rather than per file. Implementations must be
/// `Send + Sync` so independent files can be parsed in parallel against a
/// shared front-end value.
pub trait Frontend: Send + Sync {
    /// Translation unit type produced by this front-end
    type Unit: TranslationUnit;

    /// Read and parse a single file
    fn parse_file(&self, path: &Path) -> FrontendResult<Self::Unit>;

    /// Parse in-memory source text. `path` is only used for diagnostics.
    fn parse_source(&self, source: &str, path: &Path) -> FrontendResult<Self::Unit>;
}
