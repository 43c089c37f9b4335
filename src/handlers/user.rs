use crate::dispatcher::DispatchError;
use crate::handlers::Handler;
use crate::resolver::ParameterResolver;
use crate::scanner::{HandlerEntry, RouteSpec};
use crate::server::ResponseWriter;
use crate::services::{TemplateEngine, User, UserStore};
use serde_json::json;
use std::sync::Arc;

/// User management: a demo create action and the user listing page.
pub struct UserHandler {
    engine: Arc<dyn TemplateEngine>,
    users: Arc<dyn UserStore>,
}

impl UserHandler {
    /// Handler type name used in route descriptors and the factory map.
    pub const TYPE_NAME: &'static str = "UserHandler";

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
            RouteSpec::new("/user/create", "create").name("user_create"),
            RouteSpec::new("/users/list", "list").name("users_list"),
        ]
    }

    fn construct(
        args: &ParameterResolver<'_>,
    ) -> Result<Box<dyn Handler>, DispatchError> {
        Ok(Box::new(Self {
            engine: args.resolve()?,
            users: args.resolve()?,
        }))
    }

    /// Persist a fixed demo user, action-injecting the store it writes through.
    fn create(
        &self,
        args: &ParameterResolver<'_>,
        res: &mut ResponseWriter,
    ) -> Result<(), DispatchError> {
        // Action-level injection: the store is a parameter of this action, not
        // a field, mirroring handlers whose write path differs from their
        // read path.
        let store: Arc<dyn UserStore> = args.resolve()?;

        let user = User {
            name: "Gray".to_string(),
            firstname: "Amanda".to_string(),
            username: "Alex Payne".to_string(),
            email: "mozefebid@nol.mg".to_string(),
        };

        store.create(user.clone())?;
        store.flush()?;

        res.set_status(201);
        res.write(&json!({ "created": user }).to_string());
        Ok(())
    }

    fn list(&self, res: &mut ResponseWriter) -> Result<(), DispatchError> {
        let users = self.users.find_all()?;
        let html = self
            .engine
            .render("users/list.html", &json!({ "users": users }))?;
        res.write(&html);
        Ok(())
    }
}

impl Handler for UserHandler {
    fn invoke(
        &self,
        action: &str,
        args: &ParameterResolver<'_>,
        res: &mut ResponseWriter,
    ) -> Result<(), DispatchError> {
        match action {
            "create" => self.create(args, res),
            "list" => self.list(res),
            other => Err(DispatchError::UnknownAction {
                handler: Self::TYPE_NAME,
                action: other.to_string(),
            }),
        }
    }
}
