use crate::domain::{Message, Role};

/// Render messages as plain text: a header line per turn followed by its
/// content.
pub fn render_transcript(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&render_message(message));
        out.push('\n');
    }
    out
}

pub fn render_message(message: &Message) -> String {
    let header = match (message.role(), message.language()) {
        (Role::Assistant, Some(language)) => format!("assistant ({})", language),
        (role, _) => role.as_str().to_string(),
    };
    format!("── {}\n{}\n", header, message.content().trim_end())
}
