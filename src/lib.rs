//! Definitions search for Kotlin-style declarations.
//!
//! Given a source declaration (class, named function, secondary constructor,
//! property, or constructor-promoted parameter) and a search scope, the
//! [`DefinitionsSearcher`] streams every overriding or implementing
//! declaration to a caller-supplied sink, re-rooted onto original source
//! declarations wherever a faithful mapping exists.
//!
//! The searcher itself is a thin adaptation layer. Transitive inheritor
//! search, override search, and the "light" (generic class/method) projection
//! of source declarations are owned by a host platform and consumed through
//! the [`SearchHost`] trait. What this crate decides is:
//!
//!   - which host query applies to which declaration kind,
//!   - that compiler-synthesized delegation wrappers never reach the sink,
//!   - that property accessor results come back as the owning property or
//!     parameter rather than as raw getter/setter methods.
//!
//! Module layout:
//!
//! - [`types`]: declaration and light-projection model
//! - [`scope`]: search scope filter
//! - [`host`]: host capability trait
//! - [`search`]: the searcher entry point

pub mod host;
pub mod scope;
pub mod search;
pub mod types;

pub use host::SearchHost;
pub use scope::SearchScope;
pub use search::{DefinitionsSearcher, SearchParameters};
pub use types::{
    DeclId, DeclKind, Declaration, Definition, FileId, LightClass, LightMethod, PropertyAccessors,
};
