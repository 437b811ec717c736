//! MessageCard Widget
//!
//! One row of the conversation: avatar plus [`MessageContent`]. Incoming
//! messages put the avatar first and the content on the left; outgoing ones
//! mirror that and hug the right edge.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};

use super::message_content::{MessageContent, MessageContentState};
use super::profile_image::{ProfileImage, AVATAR_HEIGHT, AVATAR_WIDTH};
use crate::message::Message;
use crate::theme::Theme;

/// Columns of padding on each side of a card
pub const CARD_PADDING: u16 = 1;

/// Blank rows below each card
pub const CARD_SPACING: u16 = 1;

/// Columns between avatar and content
pub const AVATAR_GAP: u16 = 1;

/// Share of the row given to an outgoing message's content
pub const OUTGOING_WEIGHT: f32 = 0.75;

/// Share of the row given to an incoming message's content
pub const INCOMING_WEIGHT: f32 = 0.25;

/// Narrowest content column we lay out, room for a word and the padding
pub const MIN_CONTENT_WIDTH: u16 = 8;

/// Where the pieces of a card go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub avatar: Rect,
    pub content: Rect,
}

impl CardLayout {
    /// Is the avatar drawn after (to the right of) the content?
    pub fn avatar_trails(&self) -> bool {
        self.avatar.x >= self.content.right()
    }
}

/// A single message row
pub struct MessageCard<'a> {
    message: &'a Message,
    theme: &'a Theme,
    /// Card rows hidden above the area
    skip: usize,
}

impl<'a> MessageCard<'a> {
    pub fn new(message: &'a Message, theme: &'a Theme) -> Self {
        Self {
            message,
            theme,
            skip: 0,
        }
    }

    /// Draw the card from row `rows` down, for cards cut by the top of the
    /// viewport
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip = rows;
        self
    }

    /// Width of the content column for a row of `width` cells
    pub fn content_width(width: u16, is_outgoing: bool) -> u16 {
        let available = width.saturating_sub(CARD_PADDING * 2 + AVATAR_WIDTH + AVATAR_GAP);
        let weight = if is_outgoing {
            OUTGOING_WEIGHT
        } else {
            INCOMING_WEIGHT
        };
        let share = (available as f32 * weight).floor() as u16;
        share.max(MIN_CONTENT_WIDTH).min(available)
    }

    /// Split `area` into avatar and content rectangles
    pub fn layout(area: Rect, is_outgoing: bool) -> CardLayout {
        let content_width = Self::content_width(area.width, is_outgoing);
        let avatar_height = AVATAR_HEIGHT.min(area.height);
        let left = area.x + CARD_PADDING.min(area.width);
        let right = area.right().saturating_sub(CARD_PADDING).max(left);

        if is_outgoing {
            let avatar_x = right.saturating_sub(AVATAR_WIDTH).max(left);
            let content_right = avatar_x.saturating_sub(AVATAR_GAP).max(left);
            let content_x = content_right.saturating_sub(content_width).max(left);
            CardLayout {
                avatar: Rect::new(avatar_x, area.y, right - avatar_x, avatar_height),
                content: Rect::new(content_x, area.y, content_right - content_x, area.height),
            }
        } else {
            let avatar_width = AVATAR_WIDTH.min(right - left);
            let content_x = (left + avatar_width + AVATAR_GAP).min(right);
            let content_width = content_width.min(right - content_x);
            CardLayout {
                avatar: Rect::new(left, area.y, avatar_width, avatar_height),
                content: Rect::new(content_x, area.y, content_width, area.height),
            }
        }
    }

    /// Rows this card occupies at `width`, spacing included
    pub fn height(message: &Message, state: &MessageContentState, width: u16) -> usize {
        let content_width = Self::content_width(width, message.is_outgoing);
        let content = MessageContent::height(message, state, content_width);
        content.max(AVATAR_HEIGHT as usize) + CARD_SPACING as usize
    }
}

impl<'a> StatefulWidget for MessageCard<'a> {
    type State = MessageContentState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = Self::layout(area, self.message.is_outgoing);

        ProfileImage::new(self.theme.avatar_ring)
            .skip_rows(self.skip)
            .render(layout.avatar, buf);
        MessageContent::new(self.message, self.theme)
            .align_end(self.message.is_outgoing)
            .skip_rows(self.skip)
            .render(layout.content, buf, state);
    }
}
