use minijinja::Environment;
use serde_json::Value;

/// Template-rendering collaborator.
///
/// The engine is opaque to the dispatch core: handlers hand over a template
/// name and a JSON context and get back the rendered string.
pub trait TemplateEngine: Send + Sync {
    /// Render the named template with the given context.
    ///
    /// # Errors
    ///
    /// Fails when the template is unknown or rendering itself errors.
    fn render(&self, name: &str, context: &Value) -> anyhow::Result<String>;
}

/// [`TemplateEngine`] backed by an in-process minijinja environment.
///
/// Templates are added once during bootstrap; rendering is `&self` and safe to
/// share behind an `Arc`.
#[derive(Default)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Create a renderer with no templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Register a template under a name.
    ///
    /// # Errors
    ///
    /// Fails when the template source does not parse.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> anyhow::Result<()> {
        self.env.add_template_owned(name.into(), source.into())?;
        Ok(())
    }
}

impl TemplateEngine for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &Value) -> anyhow::Result<String> {
        let template = self.env.get_template(name)?;
        let rendered = template.render(minijinja::Value::from_serialize(context))?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_context() {
        let mut renderer = MiniJinjaRenderer::new();
        renderer
            .add_template("greet.html", "Hello {{ who }}!")
            .unwrap();

        let html = renderer.render("greet.html", &json!({ "who": "world" })).unwrap();
        assert_eq!(html, "Hello world!");
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        assert!(renderer.render("nope.html", &json!({})).is_err());
    }
}
