//! Declaration cursors over the tree-sitter C++ grammar.
//!
//! [`CppCursor`] adapts one grammar node to the `SourceNode` capability
//! interface. Classification happens at construction time, because the
//! grammar spreads the information the walkers need across several shapes:
//! a nested type can appear as a bare specifier or wrapped in a
//! declaration, a method can be an inline `function_definition` or a
//! declaration carrying a `function_declarator`, and constructors are only
//! recognizable by comparing the declarator name against the enclosing
//! type. Base-class clauses are expanded into one `BaseSpecifier` cursor
//! per referenced type, and enum bodies are expanded into `EnumConstant`
//! cursors carrying resolved values.

use crate::eval;
use headmeta_frontend_api::{DeclKind, SourceNode};
use std::collections::HashMap;
use tree_sitter::Node;
use tracing::debug;

/// One declaration handle, borrowing the parsed tree and source text.
#[derive(Debug, Clone, Copy)]
pub struct CppCursor<'a> {
    node: Node<'a>,
    source: &'a [u8],
    kind: DeclKind,
    /// Resolved value for `EnumConstant` cursors; unused otherwise
    value: i64,
}

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}

/// The declarator wrapped by `node`. Most wrapper kinds expose it as the
/// `declarator` field, but `reference_declarator` keeps its inner
/// declarator as a plain named child.
fn inner_declarator(node: Node) -> Option<Node> {
    node.child_by_field_name("declarator")
        .or_else(|| node.named_child(0))
}

/// Follow the declarator chain of a declaration down to its
/// `function_declarator`, if it has one. Function pointers (whose inner
/// declarator is parenthesized) are not method-like and return `None`.
fn find_function_declarator(decl: Node) -> Option<Node> {
    let mut current = decl.child_by_field_name("declarator")?;
    loop {
        match current.kind() {
            "function_declarator" => {
                let inner = current.child_by_field_name("declarator");
                if inner.map(|n| n.kind()) == Some("parenthesized_declarator") {
                    return None;
                }
                return Some(current);
            }
            "init_declarator" | "pointer_declarator" | "reference_declarator" => {
                current = inner_declarator(current)?;
            }
            _ => return None,
        }
    }
}

/// Extract the declared name from a declarator node.
fn declarator_name(node: Node, source: &[u8]) -> String {
    match node.kind() {
        "identifier" | "field_identifier" | "destructor_name" | "operator_name" => {
            text(node, source)
        }
        "qualified_identifier" | "template_function" | "template_method" => node
            .child_by_field_name("name")
            .map(|n| declarator_name(n, source))
            .unwrap_or_default(),
        _ => inner_declarator(node)
            .map(|n| declarator_name(n, source))
            .unwrap_or_default(),
    }
}

/// Name of a method-like declaration: the declarator under its
/// `function_declarator`.
fn method_name(decl: Node, source: &[u8]) -> String {
    find_function_declarator(decl)
        .and_then(|f| f.child_by_field_name("declarator"))
        .map(|n| declarator_name(n, source))
        .unwrap_or_default()
}

/// Pointer/reference symbols wrapped around a declaration's type, read off
/// the declarator chain (`String *get()` declares a `String *` return).
fn declarator_decoration(decl: Node) -> String {
    let mut symbols = String::new();
    let mut current = decl.child_by_field_name("declarator");
    while let Some(node) = current {
        match node.kind() {
            "pointer_declarator" => symbols.push('*'),
            "reference_declarator" => {
                let token = node.child(0).map(|t| t.kind()).unwrap_or("&");
                symbols.push_str(if token == "&&" { "&&" } else { "&" });
            }
            _ => break,
        }
        current = inner_declarator(node);
    }
    symbols
}

/// Spelling of a declaration's type: leading qualifiers, the type itself,
/// and pointer/reference decoration. `None` when the node declares no type
/// (constructors, destructors).
fn declared_type(decl: Node, source: &[u8]) -> Option<String> {
    let type_node = decl.child_by_field_name("type")?;

    let mut spelling = String::new();
    let mut walk = decl.walk();
    for child in decl.named_children(&mut walk) {
        if child.id() == type_node.id() {
            break;
        }
        if child.kind() == "type_qualifier" {
            spelling.push_str(&text(child, source));
            spelling.push(' ');
        }
    }
    spelling.push_str(&text(type_node, source));

    let decoration = declarator_decoration(decl);
    if !decoration.is_empty() {
        spelling.push(' ');
        spelling.push_str(&decoration);
    }
    Some(spelling)
}

/// The name field of a type specifier, scanning for an identifier when the
/// grammar does not expose the field.
fn type_name(node: Node, source: &[u8]) -> String {
    if let Some(name) = node.child_by_field_name("name") {
        return text(name, source);
    }
    let mut walk = node.walk();
    for child in node.children(&mut walk) {
        if matches!(child.kind(), "type_identifier" | "identifier") {
            return text(child, source);
        }
    }
    String::new()
}

fn method_kind(name: &str, enclosing: Option<&str>) -> DeclKind {
    if name.starts_with('~') {
        DeclKind::Destructor
    } else if enclosing == Some(name) {
        DeclKind::Constructor
    } else {
        DeclKind::Method
    }
}

impl<'a> CppCursor<'a> {
    fn with_kind(node: Node<'a>, source: &'a [u8], kind: DeclKind) -> Self {
        Self {
            node,
            source,
            kind,
            value: 0,
        }
    }

    fn enum_constant(node: Node<'a>, source: &'a [u8], value: i64) -> Self {
        Self {
            node,
            source,
            kind: DeclKind::EnumConstant,
            value,
        }
    }

    /// Classify one direct child of a scope. `enclosing` carries the name
    /// of the surrounding class/struct so constructors can be recognized.
    pub(crate) fn classify(node: Node<'a>, source: &'a [u8], enclosing: Option<&str>) -> Self {
        match node.kind() {
            "namespace_definition" => Self::with_kind(node, source, DeclKind::Namespace),
            "class_specifier" => Self::with_kind(node, source, DeclKind::Class),
            "struct_specifier" => Self::with_kind(node, source, DeclKind::Struct),
            "enum_specifier" => Self::with_kind(node, source, DeclKind::Enum),
            "function_definition" => {
                let kind = method_kind(&method_name(node, source), enclosing);
                Self::with_kind(node, source, kind)
            }
            "declaration" | "field_declaration" => {
                if find_function_declarator(node).is_some() {
                    let kind = method_kind(&method_name(node, source), enclosing);
                    return Self::with_kind(node, source, kind);
                }
                // A type declaration wrapped in a declaration statement:
                // `class Fwd;` or `struct Data { ... };` with no variable
                // declarator attached
                if node.child_by_field_name("declarator").is_none() {
                    if let Some(type_node) = node.child_by_field_name("type") {
                        let kind = match type_node.kind() {
                            "class_specifier" => Some(DeclKind::Class),
                            "struct_specifier" => Some(DeclKind::Struct),
                            "enum_specifier" => Some(DeclKind::Enum),
                            _ => None,
                        };
                        if let Some(kind) = kind {
                            return Self::with_kind(type_node, source, kind);
                        }
                    }
                }
                Self::with_kind(node, source, DeclKind::Other)
            }
            // Templates are a distinct declaration kind in compiler
            // front-ends and are not walked
            _ => Self::with_kind(node, source, DeclKind::Other),
        }
    }

    fn namespace_children(&self) -> Vec<Self> {
        let Some(body) = self.node.child_by_field_name("body") else {
            return Vec::new();
        };
        let mut walk = body.walk();
        body.named_children(&mut walk)
            .map(|n| Self::classify(n, self.source, None))
            .collect()
    }

    fn type_body_children(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let name = self.spelling();

        let mut walk = self.node.walk();
        for child in self.node.named_children(&mut walk) {
            if child.kind() != "base_class_clause" {
                continue;
            }
            let mut bases = child.walk();
            for base in child.named_children(&mut bases) {
                if matches!(
                    base.kind(),
                    "type_identifier" | "qualified_identifier" | "template_type"
                ) {
                    out.push(Self::with_kind(base, self.source, DeclKind::BaseSpecifier));
                }
            }
        }

        if let Some(body) = self.node.child_by_field_name("body") {
            let mut members = body.walk();
            for member in body.named_children(&mut members) {
                out.push(Self::classify(member, self.source, Some(name.as_str())));
            }
        }

        out
    }

    fn enum_children(&self) -> Vec<Self> {
        let Some(body) = self.node.child_by_field_name("body") else {
            return Vec::new();
        };

        let mut known: HashMap<String, i64> = HashMap::new();
        let mut next = 0i64;
        let mut out = Vec::new();

        let mut walk = body.walk();
        for child in body.named_children(&mut walk) {
            if child.kind() != "enumerator" {
                continue;
            }
            let name = child
                .child_by_field_name("name")
                .map(|n| text(n, self.source))
                .unwrap_or_default();

            let value = match child.child_by_field_name("value") {
                Some(expr) => eval::resolve(expr, self.source, &known).unwrap_or_else(|| {
                    debug!(
                        enumerator = %name,
                        "Initializer did not fold to a constant; using implicit increment"
                    );
                    next
                }),
                None => next,
            };

            known.insert(name, value);
            next = value.wrapping_add(1);
            out.push(Self::enum_constant(child, self.source, value));
        }

        out
    }
}

impl<'a> SourceNode for CppCursor<'a> {
    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn spelling(&self) -> String {
        match self.kind {
            DeclKind::Namespace => {
                if let Some(name) = self.node.child_by_field_name("name") {
                    return text(name, self.source);
                }
                let mut walk = self.node.walk();
                for child in self.node.children(&mut walk) {
                    if matches!(child.kind(), "namespace_identifier" | "identifier") {
                        return text(child, self.source);
                    }
                }
                String::new()
            }
            DeclKind::Class | DeclKind::Struct | DeclKind::Enum => {
                type_name(self.node, self.source)
            }
            DeclKind::Method | DeclKind::Constructor | DeclKind::Destructor => {
                method_name(self.node, self.source)
            }
            DeclKind::EnumConstant => self
                .node
                .child_by_field_name("name")
                .map(|n| text(n, self.source))
                .unwrap_or_default(),
            DeclKind::BaseSpecifier => text(self.node, self.source),
            DeclKind::Other => String::new(),
        }
    }

    fn type_spelling(&self) -> String {
        match self.kind {
            DeclKind::BaseSpecifier => text(self.node, self.source),
            _ => declared_type(self.node, self.source).unwrap_or_default(),
        }
    }

    fn result_type_spelling(&self) -> String {
        if !self.kind.is_method_like() {
            return String::new();
        }
        // Constructors and destructors carry no type node; front-ends
        // report their result type as void
        declared_type(self.node, self.source).unwrap_or_else(|| "void".to_string())
    }

    fn is_definition(&self) -> bool {
        match self.kind {
            DeclKind::Class | DeclKind::Struct | DeclKind::Enum => {
                self.node.child_by_field_name("body").is_some()
            }
            DeclKind::Method | DeclKind::Constructor | DeclKind::Destructor => {
                self.node.kind() == "function_definition"
            }
            _ => true,
        }
    }

    fn is_virtual_method(&self) -> bool {
        let mut walk = self.node.walk();
        for child in self.node.children(&mut walk) {
            match child.kind() {
                "virtual" | "virtual_function_specifier" => return true,
                "function_specifier" if text(child, self.source) == "virtual" => return true,
                _ => {}
            }
        }
        false
    }

    fn is_static_method(&self) -> bool {
        let mut walk = self.node.walk();
        for child in self.node.children(&mut walk) {
            if child.kind() == "storage_class_specifier" && text(child, self.source) == "static" {
                return true;
            }
        }
        false
    }

    fn children(&self) -> Vec<Self> {
        match self.kind {
            DeclKind::Namespace => self.namespace_children(),
            DeclKind::Class | DeclKind::Struct => self.type_body_children(),
            DeclKind::Enum => self.enum_children(),
            _ => Vec::new(),
        }
    }

    fn arguments(&self) -> Vec<(String, String)> {
        let Some(declarator) = find_function_declarator(self.node) else {
            return Vec::new();
        };
        let Some(params) = declarator.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut walk = params.walk();
        for param in params.named_children(&mut walk) {
            if !matches!(
                param.kind(),
                "parameter_declaration" | "optional_parameter_declaration"
            ) {
                continue;
            }
            let name = param
                .child_by_field_name("declarator")
                .map(|n| declarator_name(n, self.source))
                .unwrap_or_default();
            let type_spelling = declared_type(param, self.source).unwrap_or_default();
            out.push((name, type_spelling));
        }
        out
    }

    fn enum_value(&self) -> i64 {
        self.value
    }
}
