pub mod api;
pub mod cli;
pub mod gateway;
pub mod launcher;
pub mod session;
pub mod synthesizer;
pub mod transcript;

pub use gateway::{ExecutionGateway, PreparedScript, PythonRoute};
pub use session::Session;
pub use synthesizer::{CHAT_MODEL, CommandSynthesizer, MAX_OUTPUT_TOKENS};
