//! Template rendering for file contents, backed by MiniJinja.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use std::sync::LazyLock;

/// Every `{{ ... }}` block, including ones spanning lines.
static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{-?(.*?)-?\}\}").expect("valid expression regex")
});

/// `identifier` optionally followed by a chain of `| filter`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\s*\|\s*[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("valid placeholder regex")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer. Undefined names in conditions evaluate as false.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Wraps every `{{ ... }}` block that is not a placeholder for a known key in
/// a raw block, so unknown names and JSX object literals (`style={{ a: 1 }}`)
/// render verbatim.
pub fn protect_unknown_placeholders(template: &str, context: &serde_json::Value) -> String {
    EXPRESSION
        .replace_all(template, |caps: &regex::Captures| {
            let whole = &caps[0];
            let known = PLACEHOLDER
                .captures(caps[1].trim())
                .is_some_and(|placeholder| context.get(&placeholder[1]).is_some());
            if known {
                whole.to_string()
            } else {
                format!("{{% raw %}}{whole}{{% endraw %}}")
            }
        })
        .into_owned()
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let source = protect_unknown_placeholders(template, context);
        self.env.render_str(&source, context).map_err(Error::MinijinjaError)
    }
}
