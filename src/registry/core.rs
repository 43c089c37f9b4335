use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error};

/// Error returned by [`ServiceRegistry`] operations.
///
/// Both variants are configuration errors: a duplicate registration or a missing
/// service means the bootstrap wiring is wrong, not that the request is bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A service of this type is already registered.
    ///
    /// The registry holds singletons; registering the same type twice would
    /// silently discard one of the instances, so it is rejected instead.
    Duplicate {
        /// Fully-qualified Rust type name of the offending service
        type_name: &'static str,
    },
    /// No service of the requested type is registered.
    NotFound {
        /// Fully-qualified Rust type name of the missing service
        type_name: &'static str,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Duplicate { type_name } => {
                write!(f, "service {type_name} is already registered")
            }
            RegistryError::NotFound { type_name } => {
                write!(f, "service {type_name} not found in the registry")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Process-wide singleton service registry.
///
/// Maps a service's `TypeId` to a single shared handle. Handles must be `Clone`
/// because `resolve` hands out a copy per injection; in practice every service is
/// registered as an `Arc<Svc>` or an `Arc<dyn Trait>`, so cloning is an atomic
/// refcount bump and every consumer observes the same instance.
///
/// The registry is deliberately not internally synchronized: it is populated
/// once, before concurrent dispatch starts, and read-only afterwards.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    /// Registration-ordered type names, kept for startup logging and diagnostics
    type_names: Vec<&'static str>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            type_names: Vec::new(),
        }
    }

    /// Register a service handle under its own type.
    ///
    /// The type parameter is the lookup key: register an `Arc<dyn Trait>` (not
    /// the concrete `Arc<Impl>`) when consumers depend on the trait.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if a service of type `T` is already
    /// present. Callers treat this as fatal at startup.
    pub fn register<T>(&mut self, service: T) -> Result<(), RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        if self.services.contains_key(&TypeId::of::<T>()) {
            error!(service = type_name, "Duplicate service registration");
            return Err(RegistryError::Duplicate { type_name });
        }

        debug!(
            service = type_name,
            total_services = self.services.len() + 1,
            "Service registered"
        );

        self.services.insert(TypeId::of::<T>(), Box::new(service));
        self.type_names.push(type_name);
        Ok(())
    }

    /// Whether a service of type `T` is registered.
    #[must_use]
    pub fn has<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    /// Resolve the singleton handle registered under type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no service of type `T` was
    /// registered. This surfaces as a 5xx-class dispatch error, never as a
    /// silently omitted dependency.
    pub fn resolve<T>(&self) -> Result<T, RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref::<T>())
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Type names of all registered services, in registration order.
    #[must_use]
    pub fn type_names(&self) -> &[&'static str] {
        &self.type_names
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.type_names)
            .finish()
    }
}
