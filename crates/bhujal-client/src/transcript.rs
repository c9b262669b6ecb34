//! Rendering of a conversation buffer into transcript lines.

use bhujal_core::models::conversation::Conversation;
use bhujal_core::models::message::ChatRole;

/// Render the conversation top-to-bottom, newest last. Multi-line message
/// text stays under its speaker prefix.
pub fn render(conversation: &Conversation) -> Vec<String> {
    let mut lines = Vec::new();
    for message in &conversation.messages {
        let prefix = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
        };
        let mut first = true;
        for part in message.text.lines() {
            if first {
                lines.push(format!("{prefix:>9} | {part}"));
                first = false;
            } else {
                lines.push(format!("{:>9} | {part}", ""));
            }
        }
        if first {
            // Empty message text still occupies a line.
            lines.push(format!("{prefix:>9} |"));
        }
    }
    lines
}

/// The last `height` rendered lines: the viewport stays scrolled to the
/// newest turn.
pub fn viewport(conversation: &Conversation, height: usize) -> Vec<String> {
    let lines = render(conversation);
    let skip = lines.len().saturating_sub(height);
    lines[skip..].to_vec()
}
