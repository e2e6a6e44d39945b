pub mod engine;
pub mod template;

pub use engine::PromptTemplateEngine;
pub use template::{TemplateContext, TemplateRenderer};
