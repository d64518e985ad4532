//! The recursive declaration walkers.
//!
//! Given the top-level declarations of a parsed translation unit, the header
//! walker locates the target namespace and dispatches each qualifying child
//! to the class/struct walker or the enum walker, reconstructing a nested
//! description of every type declared inside it.
//!
//! Each walker iterates direct children in source order exactly once and
//! trusts the kinds the front-end reports; there is no semantic validation
//! here. Recursion terminates because every recursive call descends into a
//! strictly nested scope.
//!
//! One deliberate oddity is preserved from the established output contract:
//! nested *structs* are recorded when they are full definitions, while
//! nested *classes* are recorded only when they are forward declarations.
//! Downstream generators rely on the distinction (a forward declaration
//! signals that the definition lives elsewhere), so the asymmetry is kept
//! as-is rather than fixed. See `DESIGN.md`.

use crate::config::ScanConfig;
use crate::schema::{Argument, ClassInfo, EnumInfo, EnumValue, HeaderMetadata, MethodInfo};
use headmeta_frontend_api::{DeclKind, SourceNode};

/// What one direct child of a class-like scope contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contribution {
    BaseClass,
    Method,
    Enum,
    NestedStruct,
    NestedClass,
    Ignored,
}

/// Classify one direct child of a class or struct declaration.
fn classify_member<N: SourceNode>(node: &N, config: &ScanConfig) -> Contribution {
    match node.kind() {
        DeclKind::BaseSpecifier => Contribution::BaseClass,
        kind if kind.is_method_like() => {
            if config.is_excluded_method(&node.spelling()) {
                Contribution::Ignored
            } else {
                Contribution::Method
            }
        }
        // Enums are walked whenever encountered, definition or not
        DeclKind::Enum => Contribution::Enum,
        // Nested structs: full definitions only
        DeclKind::Struct if node.is_definition() => Contribution::NestedStruct,
        // Nested classes: forward declarations only
        DeclKind::Class if !node.is_definition() => Contribution::NestedClass,
        _ => Contribution::Ignored,
    }
}

/// Convert a method-like node into a method record.
fn walk_method<N: SourceNode>(node: &N) -> MethodInfo {
    let kind = node.kind();
    MethodInfo {
        name: node.spelling(),
        return_type: node.result_type_spelling(),
        arguments: node
            .arguments()
            .into_iter()
            .map(|(name, type_spelling)| Argument::new(name, type_spelling))
            .collect(),
        is_virtual: node.is_virtual_method(),
        is_static: node.is_static_method(),
        is_constructor: kind == DeclKind::Constructor,
        is_destructor: kind == DeclKind::Destructor,
    }
}

/// Convert a class or struct declaration node into a fully populated record,
/// recursing into nested enums, structs and classes.
pub fn walk_class<N: SourceNode>(node: &N, config: &ScanConfig) -> ClassInfo {
    let mut info = ClassInfo::new(node.spelling());

    for child in node.children() {
        match classify_member(&child, config) {
            Contribution::BaseClass => info.base_classes.push(child.type_spelling()),
            Contribution::Method => info.methods.push(walk_method(&child)),
            Contribution::Enum => info.enums.push(walk_enum(&child)),
            Contribution::NestedStruct => info.structs.push(walk_class(&child, config)),
            Contribution::NestedClass => info.classes.push(walk_class(&child, config)),
            Contribution::Ignored => {}
        }
    }

    info
}

/// Convert an enum declaration node into a flat list of resolved
/// `(name, value)` pairs, in declaration order.
pub fn walk_enum<N: SourceNode>(node: &N) -> EnumInfo {
    let mut info = EnumInfo::new(node.spelling());

    for child in node.children() {
        if child.kind() == DeclKind::EnumConstant {
            info.values
                .push(EnumValue::new(child.spelling(), child.enum_value()));
        }
    }

    info
}

/// Walk one translation unit's top-level declarations.
///
/// Every namespace block whose spelling equals `config.namespace` is
/// processed (at most one is expected, but all matching blocks contribute);
/// everything else at the top level is ignored entirely, including its
/// contents. A header with no matching namespace yields an empty result,
/// which is valid, not an error.
pub fn walk_header<N: SourceNode>(top_level: &[N], config: &ScanConfig) -> HeaderMetadata {
    let mut meta = HeaderMetadata::default();

    for node in top_level {
        if node.kind() != DeclKind::Namespace || node.spelling() != config.namespace {
            continue;
        }

        for child in node.children() {
            match child.kind() {
                DeclKind::Class if child.is_definition() => {
                    meta.classes.push(walk_class(&child, config));
                }
                DeclKind::Struct if child.is_definition() => {
                    meta.structs.push(walk_class(&child, config));
                }
                DeclKind::Enum => meta.enums.push(walk_enum(&child)),
                _ => {}
            }
        }
    }

    meta
}
