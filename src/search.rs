//! The definitions searcher.
//!
//! Entry point for "find implementations/definitions" over Kotlin-style
//! declarations. Dispatches on the declaration kind of the search target:
//!
//!   - **Classes and interfaces**: project to the generic class form and
//!     stream the host's transitive inheritor search, project-wide.
//!   - **Named functions and secondary constructors**: project to the
//!     generic method form and stream the host's override-implementations
//!     search within the requested scope.
//!   - **Properties and property-backing parameters**: project to accessor
//!     methods (getter, and setter when mutable), collect overriding methods
//!     per accessor, and re-root each result onto the overriding property or
//!     parameter where one exists.
//!
//! Compiler-synthesized delegation wrappers are dropped before they reach
//! the sink, and a dropped wrapper never counts toward early termination.
//! Any other declaration kind, a parameter without a backing property, or a
//! declaration with no generic counterpart is a no-op success: zero
//! deliveries and a `true` return.

use tracing::{debug, trace};

use crate::host::SearchHost;
use crate::scope::SearchScope;
use crate::types::{DeclId, DeclKind, Definition, LightMethod};

/// Bundles the target declaration and the scope to search within.
#[derive(Debug, Clone)]
pub struct SearchParameters {
    pub declaration: DeclId,
    pub scope: SearchScope,
}

impl SearchParameters {
    pub fn new(declaration: DeclId, scope: SearchScope) -> Self {
        SearchParameters { declaration, scope }
    }
}

/// Finds the declarations overriding or implementing a source declaration.
///
/// Stateless: each [`execute`](DefinitionsSearcher::execute) call is an
/// independent, synchronous search over the host's current project state.
pub struct DefinitionsSearcher<'a> {
    host: &'a dyn SearchHost,
}

impl<'a> DefinitionsSearcher<'a> {
    pub fn new(host: &'a dyn SearchHost) -> Self {
        DefinitionsSearcher { host }
    }

    /// Run the search, invoking `consumer` once per found definition.
    ///
    /// Returns `false` exactly when `consumer` stopped the search by
    /// returning `false`; that is consumer-initiated cancellation, not an
    /// error. Everything that yields nothing — an unknown handle, an
    /// unhandled declaration kind, a parameter that is not property-like, a
    /// missing projection — returns `true` with zero deliveries.
    pub fn execute(
        &self,
        params: &SearchParameters,
        consumer: &mut dyn FnMut(Definition) -> bool,
    ) -> bool {
        // Delegation wrappers are dropped here, so no strategy can surface
        // them and a dropped wrapper cannot terminate the search.
        let mut consumer = |definition: Definition| -> bool {
            if is_delegated(&definition) {
                trace!(?definition, "skipping delegation wrapper");
                return true;
            }
            consumer(definition)
        };

        let Some(declaration) = self.host.declaration(params.declaration) else {
            return true;
        };
        debug!(name = %declaration.name, kind = ?declaration.kind, "searching definitions");

        match declaration.kind {
            DeclKind::Class { .. } => self.process_class_inheritors(declaration.id, &mut consumer),
            DeclKind::Function | DeclKind::SecondaryConstructor => {
                self.process_function_implementations(declaration.id, &params.scope, &mut consumer)
            }
            DeclKind::Property { .. } => {
                self.process_property_implementations(declaration.id, &params.scope, &mut consumer)
            }
            DeclKind::Parameter {
                has_backing_property: true,
            } => self.process_property_implementations(declaration.id, &params.scope, &mut consumer),
            DeclKind::Parameter { .. } | DeclKind::PropertyAccessor { .. } | DeclKind::Other => {
                true
            }
        }
    }

    /// Class strategy: transitive inheritor search over the whole project.
    fn process_class_inheritors(
        &self,
        class: DeclId,
        consumer: &mut dyn FnMut(Definition) -> bool,
    ) -> bool {
        let Some(light) = self.host.light_class(class) else {
            debug!(?class, "class has no light form");
            return true;
        };
        self.host.inheritors(&light, true, &mut |inheritor| {
            consumer(Definition::Class(inheritor))
        })
    }

    /// Function strategy: override-implementations search within scope.
    fn process_function_implementations(
        &self,
        function: DeclId,
        scope: &SearchScope,
        consumer: &mut dyn FnMut(Definition) -> bool,
    ) -> bool {
        let Some(light) = self.host.light_method(function) else {
            debug!(?function, "function has no light method");
            return true;
        };
        self.host.implementations(&light, scope, &mut |method| {
            consumer(Definition::Method(method))
        })
    }

    /// Property strategy: search each accessor's overrides and re-root the
    /// results onto the owning property or parameter where possible.
    fn process_property_implementations(
        &self,
        property: DeclId,
        scope: &SearchScope,
        consumer: &mut dyn FnMut(Definition) -> bool,
    ) -> bool {
        let accessors = self.host.property_accessors(property);
        for accessor in accessors.iter() {
            for method in self.host.overriding_methods(accessor, scope) {
                // Skipped wrappers must not count toward termination.
                if method.delegated {
                    trace!(name = %method.name, "skipping delegated accessor");
                    continue;
                }
                if !consumer(self.source_counterpart(method)) {
                    debug!("consumer stopped the search");
                    return false;
                }
            }
        }
        true
    }

    /// Map a found accessor method back onto its source declaration.
    ///
    /// Best-effort: when the origin is an accessor without an owning
    /// property, or there is no recoverable origin at all, the raw method is
    /// delivered unchanged.
    fn source_counterpart(&self, method: LightMethod) -> Definition {
        let Some(origin) = method.origin else {
            return Definition::Method(method);
        };
        let Some(declaration) = self.host.declaration(origin) else {
            return Definition::Method(method);
        };
        match declaration.kind {
            DeclKind::Property { .. } | DeclKind::Parameter { .. } => {
                Definition::Declaration(origin)
            }
            DeclKind::PropertyAccessor {
                property: Some(owner),
            } => Definition::Declaration(owner),
            _ => Definition::Method(method),
        }
    }
}

/// Whether a definition is a compiler-synthesized delegation wrapper.
fn is_delegated(definition: &Definition) -> bool {
    matches!(definition, Definition::Method(method) if method.delegated)
}
