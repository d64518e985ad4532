/// Classification of a declaration node, as reported by the front-end.
///
/// This is the complete vocabulary the metadata walkers dispatch on. A
/// front-end adapter maps its own cursor/node kinds onto these variants and
/// reports everything it cannot (or need not) classify as [`DeclKind::Other`],
/// which the walkers ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// A namespace block (`namespace godot { ... }`)
    Namespace,
    /// A class declaration, definition or forward declaration
    Class,
    /// A struct declaration, definition or forward declaration
    Struct,
    /// An enum declaration, scoped or unscoped
    Enum,
    /// A named constant inside an enum declaration
    EnumConstant,
    /// An ordinary member function, including operators
    Method,
    /// A constructor
    Constructor,
    /// A destructor
    Destructor,
    /// A direct base class reference in a class/struct declaration
    BaseSpecifier,
    /// Anything else: fields, typedefs, friends, access specifiers, ...
    Other,
}

impl DeclKind {
    /// True for kinds that contribute a method record: ordinary methods,
    /// constructors and destructors.
    pub fn is_method_like(self) -> bool {
        matches!(
            self,
            DeclKind::Method | DeclKind::Constructor | DeclKind::Destructor
        )
    }
}
