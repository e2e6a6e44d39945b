use std::collections::BTreeMap;

use crate::domain::AppError;

/// Variables available to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    /// Variable name to value mapping.
    pub variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with `context`. `template_name` is only used for error
    /// reporting.
    fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
