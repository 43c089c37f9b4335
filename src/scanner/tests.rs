use super::{HandlerEntry, HandlerScanner, RouteSpec, ScanError, DEFAULT_ROUTE_NAME};
use crate::dispatcher::DispatchError;
use crate::handlers::Handler;
use crate::resolver::ParameterResolver;
use crate::server::ResponseWriter;
use http::Method;

struct NoopHandler;

impl Handler for NoopHandler {
    fn invoke(
        &self,
        _action: &str,
        _args: &ParameterResolver<'_>,
        _res: &mut ResponseWriter,
    ) -> Result<(), DispatchError> {
        Ok(())
    }
}

fn noop_factory(
    _args: &ParameterResolver<'_>,
) -> Result<Box<dyn Handler>, DispatchError> {
    Ok(Box::new(NoopHandler))
}

fn entry(type_name: &'static str, manifest: fn() -> Vec<RouteSpec>) -> HandlerEntry {
    HandlerEntry {
        type_name,
        manifest,
        factory: noop_factory,
    }
}

#[test]
fn test_route_spec_defaults() {
    let spec = RouteSpec::new("/contact", "contact");
    assert_eq!(spec.path, "/contact");
    assert_eq!(spec.name, DEFAULT_ROUTE_NAME);
    assert_eq!(spec.method, Method::GET);
    assert_eq!(spec.action, "contact");
}

#[test]
fn test_route_spec_overrides() {
    let spec = RouteSpec::new("/user/create", "create")
        .name("user_create")
        .method(Method::POST);
    assert_eq!(spec.name, "user_create");
    assert_eq!(spec.method, Method::POST);
}

#[test]
fn test_scan_two_annotated_actions_yield_two_descriptors() {
    fn manifest() -> Vec<RouteSpec> {
        vec![
            RouteSpec::new("/", "home").name("homepage"),
            RouteSpec::new("/contact", "contact"),
        ]
    }

    let mut scanner = HandlerScanner::new();
    scanner.register(entry("PageHandler", manifest));
    let (table, factories) = scanner.scan().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(factories.len(), 1);

    let home = table.get_route("/", &Method::GET).unwrap();
    assert_eq!(home.name, "homepage");
    assert_eq!(home.handler, "PageHandler");
    assert_eq!(home.action, "home");

    // Defaults applied where the manifest left name and method unset.
    let contact = table.get_route("/contact", &Method::GET).unwrap();
    assert_eq!(contact.name, DEFAULT_ROUTE_NAME);
    assert_eq!(contact.method, Method::GET);
}

#[test]
fn test_scan_preserves_registration_order() {
    fn first() -> Vec<RouteSpec> {
        vec![RouteSpec::new("/shared", "a").name("from_first")]
    }
    fn second() -> Vec<RouteSpec> {
        vec![RouteSpec::new("/shared", "b").name("from_second")]
    }

    let mut scanner = HandlerScanner::new();
    scanner.register(entry("FirstHandler", first));
    scanner.register(entry("SecondHandler", second));
    let (table, _) = scanner.scan().unwrap();

    // Registration order decides the winner for duplicate (path, method).
    let route = table.get_route("/shared", &Method::GET).unwrap();
    assert_eq!(route.name, "from_first");
}

#[test]
fn test_scan_duplicate_handler_type_fails() {
    fn manifest() -> Vec<RouteSpec> {
        vec![RouteSpec::new("/", "home")]
    }

    let mut scanner = HandlerScanner::new();
    scanner.register(entry("PageHandler", manifest));
    scanner.register(entry("PageHandler", manifest));

    let err = scanner.scan().unwrap_err();
    assert_eq!(
        err,
        ScanError::DuplicateHandler {
            type_name: "PageHandler"
        }
    );
}

#[test]
fn test_scan_invalid_path_fails() {
    fn manifest() -> Vec<RouteSpec> {
        vec![RouteSpec::new("missing-slash", "act")]
    }

    let mut scanner = HandlerScanner::new();
    scanner.register(entry("BadHandler", manifest));

    match scanner.scan().unwrap_err() {
        ScanError::InvalidRoutePath { type_name, path } => {
            assert_eq!(type_name, "BadHandler");
            assert_eq!(path, "missing-slash");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_scan_empty_scanner_yields_empty_table() {
    let scanner = HandlerScanner::new();
    let (table, factories) = scanner.scan().unwrap();
    assert!(table.is_empty());
    assert!(factories.is_empty());
}
