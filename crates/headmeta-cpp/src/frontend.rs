//! The tree-sitter backed `Frontend` implementation.

use crate::cursor::CppCursor;
use headmeta_frontend_api::{Frontend, FrontendError, FrontendResult, TranslationUnit};
use std::path::Path;
use tracing::trace;
use tree_sitter::{Language, Parser, Tree};

/// C++ front-end backed by the `tree-sitter-cpp` grammar.
///
/// Construction validates the grammar against the linked `tree-sitter`
/// runtime once; parsing afterwards cannot fail on version mismatch.
pub struct CppFrontend {
    language: Language,
}

/// One parsed header: the syntax tree plus the source it was parsed from.
///
/// Cursors borrow from the unit, so the unit must outlive every walk over
/// its nodes.
pub struct CppTranslationUnit {
    source: String,
    tree: Tree,
}

impl CppFrontend {
    pub fn new() -> FrontendResult<Self> {
        let language = tree_sitter_cpp::language();
        // Fails if the grammar was built against an incompatible ABI
        let mut probe = Parser::new();
        probe
            .set_language(&language)
            .map_err(|e| FrontendError::configuration(format!("C++ grammar rejected: {}", e)))?;
        Ok(Self { language })
    }

    fn parser(&self) -> FrontendResult<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| FrontendError::configuration(format!("C++ grammar rejected: {}", e)))?;
        Ok(parser)
    }
}

impl Frontend for CppFrontend {
    type Unit = CppTranslationUnit;

    fn parse_file(&self, path: &Path) -> FrontendResult<Self::Unit> {
        let source = std::fs::read_to_string(path).map_err(|e| FrontendError::io(path, e))?;
        self.parse_source(&source, path)
    }

    fn parse_source(&self, source: &str, path: &Path) -> FrontendResult<Self::Unit> {
        let mut parser = self.parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FrontendError::parse(path, "parser produced no syntax tree"))?;

        // Headers routinely contain macros the grammar cannot resolve;
        // error nodes are tolerated and simply contribute nothing
        if tree.root_node().has_error() {
            trace!(path = %path.display(), "Syntax tree contains error nodes");
        }

        Ok(CppTranslationUnit {
            source: source.to_string(),
            tree,
        })
    }
}

impl TranslationUnit for CppTranslationUnit {
    type Node<'a> = CppCursor<'a>;

    fn top_level(&self) -> Vec<CppCursor<'_>> {
        let root = self.tree.root_node();
        let source = self.source.as_bytes();
        let mut walk = root.walk();
        root.named_children(&mut walk)
            .map(|n| CppCursor::classify(n, source, None))
            .collect()
    }
}
