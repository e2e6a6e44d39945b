//! maxgpt: turn natural-language requests into 3ds Max scripts and run them.
//!
//! A [`Session`] ties a [`CommandSynthesizer`], which keeps the conversation
//! with the chat API, to an [`ExecutionGateway`], which wraps generated code
//! for the host and submits it.

pub mod app;
pub mod assets;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppGateway, AppSession, SessionOptions, load_settings, open_gateway, open_session,
    register_launchers, set_api_key,
};
pub use app::{
    CHAT_MODEL, CommandSynthesizer, ExecutionGateway, MAX_OUTPUT_TOKENS, PreparedScript,
    PythonRoute, Session,
};
pub use domain::{
    AppError, ConversationHistory, Credentials, Dialect, LauncherEntry, ListenerId, Message, Role,
    Settings, SynthesisRequest, SynthesisResult,
};
