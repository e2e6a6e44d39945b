mod fake_chat_client;
mod mock_clipboard;
mod recording_host;

pub use fake_chat_client::FakeChatClient;
pub use mock_clipboard::MockClipboard;
pub use recording_host::RecordingHostRuntime;
