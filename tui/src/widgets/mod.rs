//! Widgets
//!
//! - **Conversation**: virtualized list of message cards
//! - **MessageCard**: avatar plus content, mirrored for outgoing messages
//! - **MessageContent**: author label and expandable bubble
//! - **ProfileImage**: the fixed avatar

pub mod conversation;
pub mod message_card;
pub mod message_content;
pub mod profile_image;

pub use conversation::{Conversation, ConversationState, VisibleCard};
pub use message_card::{CardLayout, MessageCard};
pub use message_content::{MessageContent, MessageContentState};
pub use profile_image::ProfileImage;
