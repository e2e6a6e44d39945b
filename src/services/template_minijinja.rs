use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{AppError, TemplateContext, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Only `{{ variable }}` substitution is allowed; block and comment syntax in a
/// template is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(AppError::TemplateRender {
                template: template_name.to_string(),
                reason: format!("template syntax '{}' is not allowed", token),
            });
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, &context.variables).map_err(|err| AppError::TemplateRender {
            template: template_name.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
