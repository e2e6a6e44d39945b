pub mod conversation;
pub mod dialect;
pub mod error;
pub mod launcher;
pub mod message;
pub mod prompt;
pub mod script;
pub mod settings;

pub use conversation::{ConversationHistory, ListenerId};
pub use dialect::Dialect;
pub use error::AppError;
pub use launcher::{LauncherEntry, MacroScript};
pub use message::{Message, Role, SynthesisRequest, SynthesisResult};
pub use prompt::{PromptTemplateEngine, TemplateContext, TemplateRenderer};
pub use settings::{
    API_KEY_ENV, ApiConfig, Credentials, HostConfig, PythonEmbedding, Settings, SettingsNamespace,
};
