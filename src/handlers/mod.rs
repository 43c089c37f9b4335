//! # Handlers Module
//!
//! The [`Handler`] trait and the demo handlers shipped with the crate.
//!
//! A handler is a short-lived object: its factory builds a fresh instance per
//! request with constructor dependencies pulled from the registry, the matched
//! action runs once, and the instance is dropped. Handlers therefore never hold
//! shared mutable state; anything shared lives behind a registered service.
//!
//! Handlers advertise themselves to the scan phase through a
//! [`HandlerEntry`](crate::scanner::HandlerEntry): a type name, a manifest of
//! [`RouteSpec`](crate::scanner::RouteSpec) values (the route-annotation
//! surface), and the factory. The bundled handlers follow one convention worth
//! copying: a `TYPE_NAME` constant, an `entry()` constructor for wiring, and an
//! `invoke` that matches on the action name and delegates to one private method
//! per route.

use crate::dispatcher::DispatchError;
use crate::resolver::ParameterResolver;
use crate::server::ResponseWriter;

mod index;
mod user;

pub use index::IndexHandler;
pub use user::UserHandler;

/// A constructed handler ready to serve exactly one request.
pub trait Handler {
    /// Run the named action.
    ///
    /// `args` resolves the action's own parameters against the registry and
    /// `res` is the response channel the action writes to.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownAction`] when the route names an action this
    /// handler does not expose, or any error raised by the action body.
    fn invoke(
        &self,
        action: &str,
        args: &ParameterResolver<'_>,
        res: &mut ResponseWriter,
    ) -> Result<(), DispatchError>;
}

/// Constructor-injection entry point for a handler type.
///
/// Called once per dispatched request. The factory resolves the handler's
/// constructor dependencies and fails with an injection error when a required
/// service is missing - a misconfiguration, never silently tolerated.
pub type HandlerFactory =
    fn(&ParameterResolver<'_>) -> Result<Box<dyn Handler>, DispatchError>;
