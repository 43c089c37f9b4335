use crate::handlers::HandlerFactory;
use crate::registry::{RegistryError, ServiceRegistry};
use crate::resolver::ParameterResolver;
use crate::router::RouteTable;
use crate::server::ResponseWriter;
use http::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Error raised while executing a single request.
///
/// Every failure mode is a distinct variant so the boundary layer can choose the
/// user-visible presentation (404 for a missing route, 5xx for everything else).
#[derive(Debug)]
pub enum DispatchError {
    /// No table entry matches the requested (path, method) pair.
    RouteNotFound {
        /// The path the client asked for, echoed back in the error message
        path: String,
    },
    /// The matched route names a handler type with no registered factory.
    ///
    /// The scan phase builds table and factory map from the same entries, so
    /// this indicates a wiring bug rather than a bad request.
    HandlerNotRegistered {
        /// Handler type name the route referenced
        handler: &'static str,
    },
    /// The handler does not expose the action named by the route.
    UnknownAction {
        /// Handler type name
        handler: &'static str,
        /// The action that was requested
        action: String,
    },
    /// A constructor or action parameter could not be resolved.
    Injection(RegistryError),
    /// The handler body itself failed (rendering, persistence, ...).
    Handler(anyhow::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::RouteNotFound { path } => {
                write!(f, "no route found for the requested path (path: {path})")
            }
            DispatchError::HandlerNotRegistered { handler } => {
                write!(f, "no factory registered for handler {handler}")
            }
            DispatchError::UnknownAction { handler, action } => {
                write!(f, "handler {handler} has no action named {action}")
            }
            DispatchError::Injection(err) => {
                write!(f, "dependency injection failed: {err}")
            }
            DispatchError::Handler(err) => {
                write!(f, "handler failed: {err}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Injection(err) => Some(err),
            DispatchError::Handler(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<RegistryError> for DispatchError {
    fn from(err: RegistryError) -> Self {
        DispatchError::Injection(err)
    }
}

impl From<anyhow::Error> for DispatchError {
    fn from(err: anyhow::Error) -> Self {
        DispatchError::Handler(err)
    }
}

/// Executes requests against the scanned route table.
///
/// Holds the read-only products of the scan phase and the shared registry; the
/// dispatcher itself carries no per-request state, so a single instance serves
/// concurrent callers through `&self`.
pub struct Dispatcher {
    table: RouteTable,
    factories: HashMap<&'static str, HandlerFactory>,
    registry: Arc<ServiceRegistry>,
}

impl Dispatcher {
    /// Assemble a dispatcher from the scan products and the populated registry.
    ///
    /// The registry must be fully populated before this point; the dispatcher
    /// never writes to it.
    #[must_use]
    pub fn new(
        table: RouteTable,
        factories: HashMap<&'static str, HandlerFactory>,
        registry: Arc<ServiceRegistry>,
    ) -> Self {
        table.log_summary();
        Self {
            table,
            factories,
            registry,
        }
    }

    /// The route table this dispatcher serves.
    #[must_use]
    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }

    /// Execute one request.
    ///
    /// Looks up the route, constructs the handler with its constructor
    /// dependencies injected, and invokes the matched action with its action
    /// parameters injected. The handler writes the response body and status to
    /// `res`; the return value only reports success or failure.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::RouteNotFound`] when no route matches; no handler is
    ///   constructed in that case.
    /// - [`DispatchError::Injection`] when a required dependency is missing.
    /// - Any other variant raised by the factory or the handler body.
    pub fn execute(
        &self,
        path: &str,
        method: &Method,
        res: &mut ResponseWriter,
    ) -> Result<(), DispatchError> {
        debug!(path = %path, method = %method, "Route lookup");

        let route = match self.table.get_route(path, method) {
            Some(route) => route,
            None => {
                warn!(path = %path, method = %method, "No route matched");
                return Err(DispatchError::RouteNotFound {
                    path: path.to_string(),
                });
            }
        };

        info!(
            path = %path,
            method = %method,
            route = %route.name,
            handler = route.handler,
            action = route.action,
            "Route matched"
        );

        let factory = match self.factories.get(route.handler) {
            Some(factory) => factory,
            None => {
                error!(handler = route.handler, "Handler factory not registered");
                return Err(DispatchError::HandlerNotRegistered {
                    handler: route.handler,
                });
            }
        };

        // One resolver per request: constructor injection first, then the
        // action's own parameters. Dropped when this call returns.
        let resolver = ParameterResolver::new(&self.registry);
        let handler = factory(&resolver)?;
        handler.invoke(route.action, &resolver, res)?;

        debug!(route = %route.name, status = res.status(), "Dispatch complete");
        Ok(())
    }
}
