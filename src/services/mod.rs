mod chat_client_http;
mod clipboard_arboard;
mod host_console;
mod host_process;
mod script_staging;
mod settings_filesystem;
mod template_minijinja;

pub use chat_client_http::HttpChatClient;
pub use clipboard_arboard::ArboardClipboard;
pub use host_console::ConsoleHostRuntime;
pub use host_process::ProcessHostRuntime;
pub use script_staging::ScriptStager;
pub use settings_filesystem::FilesystemSettingsStore;
pub use template_minijinja::MinijinjaTemplateRenderer;
