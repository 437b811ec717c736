//! Sample Data
//!
//! The fixed conversation shown on startup and in previews.

use std::sync::OnceLock;

use crate::message::Message;

/// Greeting used by the single-card preview
pub const PREVIEW_AUTHOR: &str = "Mario";
pub const PREVIEW_BODY: &str = "Hey, take a look at Jetpack Compose, it's great!";

static CONVERSATION: OnceLock<Vec<Message>> = OnceLock::new();

/// The preview message
pub fn preview_message() -> Message {
    Message::new(PREVIEW_AUTHOR, PREVIEW_BODY)
}

/// The sample conversation, in display order
pub fn conversation_sample() -> &'static [Message] {
    CONVERSATION.get_or_init(build_conversation)
}

fn build_conversation() -> Vec<Message> {
    vec![
        preview_message(),
        Message::outgoing("Me", "Looks neat. Is it hard to pick up?"),
        Message::new(
            "Mario",
            "Not really. You describe the UI as functions of state and the \
             framework redraws whatever changed. No more juggling views by hand.",
        ),
        Message::new(
            "Mario",
            "List of Android versions:\n\
             Android KitKat (API 19)\n\
             Android Lollipop (API 21)\n\
             Android Marshmallow (API 23)\n\
             Android Nougat (API 24)\n\
             Android Oreo (API 26)\n\
             Android Pie (API 28)\n\
             Android 10 (API 29)\n\
             Android 11 (API 30)\n\
             Android 12 (API 31)",
        ),
        Message::outgoing(
            "Me",
            "I think Kotlin is my favorite programming language. It's so much fun!",
        ),
        Message::new("Mario", "Searching for alternatives to XML layouts..."),
        Message::new(
            "Mario",
            "Hey, take a look at the tutorial, it covers rows, columns, lists \
             and animations. Tap a message to expand it and watch the color fade in.",
        ),
        Message::outgoing("Me", "Test...Test...Test..."),
        Message::new(
            "Mario",
            "Composable functions can only be called from other composable \
             functions. They describe UI, they don't return it.",
        ),
        Message::outgoing(
            "Me",
            "Previews in light and dark mode side by side are a nice touch. \
             Saves a lot of emulator restarts.",
        ),
        Message::new("Mario", "Lazy lists only lay out what's on screen, so long chats stay fast."),
        Message::outgoing("Me", "Great! Thanks for the tips."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_stable() {
        let first = conversation_sample();
        let second = conversation_sample();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn test_sample_starts_with_preview_message() {
        assert_eq!(conversation_sample()[0], preview_message());
    }

    #[test]
    fn test_sample_has_both_directions() {
        let sample = conversation_sample();
        assert!(sample.iter().any(|m| m.is_outgoing));
        assert!(sample.iter().any(|m| !m.is_outgoing));
    }
}
