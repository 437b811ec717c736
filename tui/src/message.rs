//! Message
//!
//! One chat entry. Immutable once built; equality is structural.

/// A single chat message
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    /// Who wrote it
    pub author: String,
    /// Message text, may contain newlines
    pub body: String,
    /// Sent by the local user (right-aligned, darker bubble)
    pub is_outgoing: bool,
}

impl Message {
    /// Create an incoming message
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            is_outgoing: false,
        }
    }

    /// Create a message sent by the local user
    pub fn outgoing(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            is_outgoing: true,
            ..Self::new(author, body)
        }
    }
}
