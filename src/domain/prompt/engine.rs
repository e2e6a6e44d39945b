use crate::assets::read_asset;
use crate::domain::{AppError, Dialect};

use super::template::{TemplateContext, TemplateRenderer};

/// Turns a task description into a dialect-specific instruction prompt.
///
/// Rendering is pure: the same task and dialect always produce the same
/// prompt. The task text is substituted verbatim.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplateEngine<R: TemplateRenderer> {
    renderer: R,
}

impl<R: TemplateRenderer> PromptTemplateEngine<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, task_text: &str, dialect: Dialect) -> Result<String, AppError> {
        let path = template_path(dialect);
        let template = read_asset(path).ok_or_else(|| AppError::TemplateRender {
            template: path.to_string(),
            reason: "template asset is missing".to_string(),
        })?;
        let context = TemplateContext::new().with_var("task", task_text);
        self.renderer.render(template, &context, path)
    }
}

fn template_path(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::MaxScript => "prompts/maxscript.j2",
        Dialect::Python => "prompts/python.j2",
    }
}
