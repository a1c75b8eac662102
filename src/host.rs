//! The host capability trait.
//!
//! The searcher does not parse, resolve, or index anything itself. All of
//! that sits behind [`SearchHost`]: the host projects source declarations
//! into their generic class/method form and runs the actual inheritor and
//! override searches. Results are owned values so nothing borrows from host
//! state.
//!
//! Projection lookups take a short shared-read guard over host project
//! state internally and release it before returning. The searcher never
//! needs a guard held across a search call, so a host is free to run its
//! searches with whatever internal parallelism it wants.

use crate::scope::SearchScope;
use crate::types::{DeclId, Declaration, LightClass, LightMethod, PropertyAccessors};

/// Projection and search facilities provided by the host platform.
///
/// A `None` from either projection method is the normal "no generic
/// counterpart" case (declaration not compiled, local, or otherwise not
/// representable); the searcher treats it as an empty result, never as an
/// error.
pub trait SearchHost {
    /// Resolve a declaration handle to its current view.
    fn declaration(&self, id: DeclId) -> Option<Declaration>;

    /// Project a class declaration to its generic class form.
    fn light_class(&self, class: DeclId) -> Option<LightClass>;

    /// Project a function or secondary constructor to its generic method
    /// form.
    fn light_method(&self, function: DeclId) -> Option<LightMethod>;

    /// Project a property or property-backing parameter to its accessor
    /// methods. Either accessor may be absent.
    fn property_accessors(&self, declaration: DeclId) -> PropertyAccessors;

    /// Stream the subtypes of `class` project-wide — direct only, or direct
    /// and indirect when `deep` is set. Order is host-defined.
    ///
    /// A `false` from `consumer` must stop the iteration immediately; the
    /// return value is `false` exactly when the consumer stopped it.
    fn inheritors(
        &self,
        class: &LightClass,
        deep: bool,
        consumer: &mut dyn FnMut(LightClass) -> bool,
    ) -> bool;

    /// Stream the methods overriding or implementing `method` within
    /// `scope`. Same short-circuit contract as [`inheritors`].
    ///
    /// [`inheritors`]: SearchHost::inheritors
    fn implementations(
        &self,
        method: &LightMethod,
        scope: &SearchScope,
        consumer: &mut dyn FnMut(LightMethod) -> bool,
    ) -> bool;

    /// Collect the methods overriding `method` within `scope`.
    ///
    /// The collecting counterpart of [`implementations`], used where results
    /// need remapping before delivery.
    ///
    /// [`implementations`]: SearchHost::implementations
    fn overriding_methods(&self, method: &LightMethod, scope: &SearchScope) -> Vec<LightMethod>;
}
