//! # Parameter Resolver Module
//!
//! Per-invocation resolution of handler parameters against the service registry.
//!
//! A [`ParameterResolver`] is constructed by the dispatcher for each `execute`
//! call, handed first to the handler factory (constructor injection) and then to
//! the invoked action (action-parameter injection), and dropped when the call
//! returns. It carries no state of its own: it is a borrow of the registry, so
//! the binding it represents is ephemeral by construction.
//!
//! Resolution is purely type-based and singleton-only. There is no binding
//! configuration and no request or transient scope: whatever `Arc` was
//! registered at startup is what every invocation receives.
//!
//! Required versus optional dependencies are explicit at the call site:
//! [`ParameterResolver::resolve`] fails hard on a missing service, while
//! [`ParameterResolver::resolve_opt`] returns `None` for parameters a handler
//! can genuinely do without.

use crate::registry::{RegistryError, ServiceRegistry};

/// Borrowed view of the registry used to supply one invocation's parameters.
#[derive(Debug, Clone, Copy)]
pub struct ParameterResolver<'a> {
    registry: &'a ServiceRegistry,
}

impl<'a> ParameterResolver<'a> {
    /// Create a resolver over the given registry.
    #[must_use]
    pub fn new(registry: &'a ServiceRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a required dependency.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no service of type `T` is
    /// registered. The dispatcher surfaces this as an injection failure - a
    /// required dependency is never silently skipped.
    pub fn resolve<T>(&self) -> Result<T, RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.registry.resolve::<T>()
    }

    /// Resolve an optional dependency.
    ///
    /// Returns `None` when no service of type `T` is registered. Use this only
    /// for parameters whose absence still yields a valid call.
    #[must_use]
    pub fn resolve_opt<T>(&self) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.registry.resolve::<T>().ok()
    }

    /// Whether a service of type `T` could be resolved.
    #[must_use]
    pub fn has<T: 'static>(&self) -> bool {
        self.registry.has::<T>()
    }
}
