use crate::dispatcher::DispatchError;
use crate::handlers::Handler;
use crate::resolver::ParameterResolver;
use crate::scanner::{HandlerEntry, RouteSpec};
use crate::server::ResponseWriter;
use crate::services::TemplateEngine;
use serde_json::json;
use std::sync::Arc;

/// Static pages: the landing page and the contact page.
pub struct IndexHandler {
    engine: Arc<dyn TemplateEngine>,
}

impl IndexHandler {
    /// Handler type name used in route descriptors and the factory map.
    pub const TYPE_NAME: &'static str = "IndexHandler";

    /// Scan-phase entry for this handler.
    #[must_use]
    pub fn entry() -> HandlerEntry {
        HandlerEntry {
            type_name: Self::TYPE_NAME,
            manifest: Self::manifest,
            factory: Self::construct,
        }
    }

    fn manifest() -> Vec<RouteSpec> {
        vec![
            RouteSpec::new("/", "home").name("homepage"),
            // name and method left to their defaults: "default_route", GET
            RouteSpec::new("/contact", "contact"),
        ]
    }

    fn construct(
        args: &ParameterResolver<'_>,
    ) -> Result<Box<dyn Handler>, DispatchError> {
        Ok(Box::new(Self {
            engine: args.resolve()?,
        }))
    }

    fn home(&self, res: &mut ResponseWriter) -> Result<(), DispatchError> {
        let html = self.engine.render("home.html", &json!({}))?;
        res.write(&html);
        Ok(())
    }

    fn contact(&self, res: &mut ResponseWriter) -> Result<(), DispatchError> {
        let html = self.engine.render("contact.html", &json!({}))?;
        res.write(&html);
        Ok(())
    }
}

impl Handler for IndexHandler {
    fn invoke(
        &self,
        action: &str,
        _args: &ParameterResolver<'_>,
        res: &mut ResponseWriter,
    ) -> Result<(), DispatchError> {
        match action {
            "home" => self.home(res),
            "contact" => self.contact(res),
            other => Err(DispatchError::UnknownAction {
                handler: Self::TYPE_NAME,
                action: other.to_string(),
            }),
        }
    }
}
