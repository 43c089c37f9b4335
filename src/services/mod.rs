//! # Services Module
//!
//! Collaborator seams the dispatch engine treats as opaque, plus the concrete
//! implementations the demo application and tests register.
//!
//! - [`TemplateEngine`] - `render(name, context) -> String`, implemented by
//!   [`MiniJinjaRenderer`]
//! - [`UserStore`] - `create` / `find_all` / `flush`, implemented by the
//!   transactional-ish [`InMemoryUserStore`]
//!
//! Handlers depend on the trait-object handles (`Arc<dyn TemplateEngine>`,
//! `Arc<dyn UserStore>`); the registry key is the trait-object type, so swapping
//! an implementation never touches a handler.

mod render;
mod store;

pub use render::{MiniJinjaRenderer, TemplateEngine};
pub use store::{InMemoryUserStore, User, UserStore};
