//! Chat Bubbles - a terminal chat list
//!
//! A scrollable list of message bubbles that expand and collapse with a
//! short animation, in light or dark palettes.
//!
//! # Architecture
//!
//! - **Widgets**: Conversation, MessageCard, MessageContent, ProfileImage
//! - **Animation**: eased tweens driven by the frame delta
//! - **Theme**: light/dark palettes and opacity blending
//! - **Preview**: off-screen renders printed as text

pub mod animation;
pub mod app;
pub mod config;
pub mod message;
pub mod preview;
pub mod sample_data;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use message::Message;
pub use theme::{Theme, ThemeMode};
