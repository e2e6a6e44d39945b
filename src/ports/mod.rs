mod chat_client;
mod clipboard_writer;
mod host_runtime;
mod settings_store;

pub use chat_client::{ChatCompletionClient, ChatMessage, ChatRequest};
pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use host_runtime::HostRuntime;
pub use settings_store::SettingsStore;
