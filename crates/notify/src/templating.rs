//! Minijinja template rendering for alert messages.
//!
//! Templates are arbitrary strings (not pre-registered), so a fresh
//! [`minijinja::Environment`] is created per render call.

use serde::Serialize;

use crate::traits::MailError;

/// Renders alert subject/body templates using minijinja.
#[derive(Debug, Default)]
pub struct TemplateRenderer {
    _private: (),
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Render a template string with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Template`] if the template is invalid or
    /// rendering fails.
    pub fn render<C: Serialize>(&self, template_str: &str, ctx: &C) -> Result<String, MailError> {
        let env = minijinja::Environment::new();
        env.render_str(template_str, ctx)
            .map_err(|e| MailError::Template(e.to_string()))
    }

    /// Validate that a template string parses without errors. Does not
    /// evaluate the template.
    pub fn validate(&self, template_str: &str) -> Result<(), MailError> {
        let env = minijinja::Environment::new();
        env.template_from_str(template_str)
            .map_err(|e| MailError::Template(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn renders_simple_substitution() {
        let renderer = TemplateRenderer::new();
        let ctx = HashMap::from([("bucket", "db-backups"), ("environment", "staging")]);
        let out = renderer
            .render("[{{ environment }}] backup check for {{ bucket }}", &ctx)
            .unwrap();
        assert_eq!(out, "[staging] backup check for db-backups");
    }

    #[test]
    fn invalid_template_is_an_error() {
        let renderer = TemplateRenderer::new();
        let ctx: HashMap<&str, &str> = HashMap::new();
        assert!(renderer.render("{{ unclosed", &ctx).is_err());
    }

    #[test]
    fn validate_catches_syntax_errors() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.validate("{% if x %}ok{% endif %}").is_ok());
        assert!(renderer.validate("{% if x %}never closed").is_err());
    }
}
