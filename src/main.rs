use clap::Parser;
use http::Method;
use routier::handlers::{IndexHandler, UserHandler};
use routier::services::{InMemoryUserStore, MiniJinjaRenderer, TemplateEngine, UserStore};
use routier::{respond, server::status_reason, Dispatcher, HandlerScanner, ServiceRegistry};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HOME_TEMPLATE: &str = "<h1>Home</h1><p>Welcome to routier.</p>";
const CONTACT_TEMPLATE: &str = "<h1>Contact</h1><p>Drop us a line.</p>";
const USERS_LIST_TEMPLATE: &str = "<ul>{% for user in users %}<li>{{ user.username }} &lt;{{ user.email }}&gt;</li>{% endfor %}</ul>";

/// Dispatch a single request against the demo application.
#[derive(Parser, Debug)]
#[command(name = "routier", version, about)]
struct Args {
    /// Request path to dispatch
    #[arg(long, default_value = "/")]
    path: String,

    /// HTTP method of the request
    #[arg(long, default_value = "GET")]
    method: String,

    /// Print the scanned route table before dispatching
    #[arg(long)]
    dump_routes: bool,
}

fn build_dispatcher() -> anyhow::Result<Dispatcher> {
    let mut renderer = MiniJinjaRenderer::new();
    renderer.add_template("home.html", HOME_TEMPLATE)?;
    renderer.add_template("contact.html", CONTACT_TEMPLATE)?;
    renderer.add_template("users/list.html", USERS_LIST_TEMPLATE)?;

    let mut registry = ServiceRegistry::new();
    registry.register::<Arc<dyn TemplateEngine>>(Arc::new(renderer))?;
    registry.register::<Arc<dyn UserStore>>(Arc::new(InMemoryUserStore::new()))?;

    let mut scanner = HandlerScanner::new();
    scanner.register(IndexHandler::entry());
    scanner.register(UserHandler::entry());
    let (table, factories) = scanner.scan()?;

    Ok(Dispatcher::new(table, factories, Arc::new(registry)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let dispatcher = build_dispatcher()?;

    if args.dump_routes {
        dispatcher.route_table().dump_routes();
    }

    let method: Method = args.method.to_uppercase().parse()?;
    let (status, body) = respond(&dispatcher, &args.path, &method);

    println!("{} {}", status, status_reason(status));
    println!("{body}");

    if status >= 500 {
        std::process::exit(1);
    }
    Ok(())
}
