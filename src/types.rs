//! Data types shared between the searcher and its host.
//!
//! This module contains the "model" structs and enums: source declaration
//! views, their light (generic class/method) projections, and the result
//! type delivered to the sink. All data is owned so results don't borrow
//! from the host's internal state.

/// Handle to a file known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// Handle to a source declaration known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

/// The declaration kinds the searcher dispatches on.
///
/// Anything the searcher does not handle is `Other`; searching from such a
/// declaration is a no-op success, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// A class, interface, or object declaration.
    Class {
        /// Whether this is an interface rather than a concrete class.
        is_interface: bool,
    },
    /// A named function.
    Function,
    /// A secondary constructor.
    SecondaryConstructor,
    /// A `val`/`var` property.
    Property {
        /// Whether the property is mutable (`var`), i.e. also has a setter.
        is_mutable: bool,
    },
    /// A constructor parameter.
    Parameter {
        /// Whether the parameter also declares a class-level property
        /// (constructor `val`/`var`). Only such parameters take part in
        /// definitions search.
        has_backing_property: bool,
    },
    /// An explicit getter or setter block of a property.
    PropertyAccessor {
        /// The owning property, when one exists.
        property: Option<DeclId>,
    },
    /// Any declaration kind the searcher does not handle.
    Other,
}

/// A read-only view of a source declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub id: DeclId,
    /// The declared name (e.g. "Base", "render", "x").
    pub name: String,
    /// The file the declaration lives in.
    pub file: FileId,
    pub kind: DeclKind,
}

/// The host's generic class projection of a class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightClass {
    pub name: String,
    pub file: FileId,
    /// Back-reference to the originating source declaration, when the class
    /// has a source counterpart. Lookup-only, never an ownership edge.
    pub origin: Option<DeclId>,
}

/// The host's generic method projection of a function, constructor, or
/// property accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightMethod {
    /// The method name in the generic model (e.g. "render", "getX").
    pub name: String,
    /// The class declaration this method belongs to.
    pub class: DeclId,
    pub file: FileId,
    /// Back-reference to the originating source declaration, when one
    /// exists.
    pub origin: Option<DeclId>,
    /// Whether this method is a compiler-synthesized delegation wrapper.
    /// Wrappers are never surfaced as definitions.
    pub delegated: bool,
}

/// The accessor methods a property (or property-backing parameter) projects
/// to. The setter is present only for mutable properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAccessors {
    pub getter: Option<LightMethod>,
    pub setter: Option<LightMethod>,
}

impl PropertyAccessors {
    /// Iterate the present accessors, getter first.
    pub fn iter(&self) -> impl Iterator<Item = &LightMethod> {
        self.getter.iter().chain(self.setter.iter())
    }
}

/// A single found definition, as delivered to the result sink.
///
/// Every delivered value is either an original source declaration or, when
/// no source counterpart is recoverable, the raw projection itself — never a
/// delegation wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// An original source declaration.
    Declaration(DeclId),
    /// A class projection (inheritor results are forwarded unmapped).
    Class(LightClass),
    /// A method projection, delivered raw when no source origin applies.
    Method(LightMethod),
}
