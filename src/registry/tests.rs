use super::{RegistryError, ServiceRegistry};
use std::sync::Arc;

#[derive(Debug)]
struct Database {
    url: String,
}

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

#[test]
fn test_register_and_resolve_concrete_type() {
    let mut registry = ServiceRegistry::new();
    registry
        .register(Arc::new(Database {
            url: "postgres://localhost".into(),
        }))
        .unwrap();

    assert!(registry.has::<Arc<Database>>());
    let db: Arc<Database> = registry.resolve().unwrap();
    assert_eq!(db.url, "postgres://localhost");
}

#[test]
fn test_resolve_returns_same_singleton() {
    let mut registry = ServiceRegistry::new();
    let db = Arc::new(Database { url: "x".into() });
    registry.register(Arc::clone(&db)).unwrap();

    let a: Arc<Database> = registry.resolve().unwrap();
    let b: Arc<Database> = registry.resolve().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &db));
}

#[test]
fn test_register_trait_object() {
    let mut registry = ServiceRegistry::new();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(42));
    registry.register(clock).unwrap();

    assert!(registry.has::<Arc<dyn Clock>>());
    // The concrete impl type is not a key, only the trait-object type is.
    assert!(!registry.has::<Arc<FixedClock>>());

    let clock: Arc<dyn Clock> = registry.resolve().unwrap();
    assert_eq!(clock.now(), 42);
}

#[test]
fn test_duplicate_registration_fails() {
    let mut registry = ServiceRegistry::new();
    registry.register(Arc::new(Database { url: "a".into() })).unwrap();

    let err = registry
        .register(Arc::new(Database { url: "b".into() }))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Duplicate { .. }));
    assert!(err.to_string().contains("already registered"));

    // The first registration survives untouched.
    let db: Arc<Database> = registry.resolve().unwrap();
    assert_eq!(db.url, "a");
}

#[test]
fn test_resolve_unregistered_fails() {
    let registry = ServiceRegistry::new();
    let err = registry.resolve::<Arc<Database>>().unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_len_and_type_names_track_registrations() {
    let mut registry = ServiceRegistry::new();
    assert!(registry.is_empty());

    registry.register(Arc::new(Database { url: "a".into() })).unwrap();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(1));
    registry.register(clock).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.type_names().len(), 2);
}
