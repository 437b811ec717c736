//! MessageContent Widget
//!
//! Author label above a bubble holding the message body. Each card owns a
//! [`MessageContentState`] with a two-state toggle:
//!
//! - **collapsed** (initial): one body line, bubble at reduced opacity
//! - **expanded**: every wrapped body line, bubble fully opaque
//!
//! Both the opacity and the number of visible lines animate between the two.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::StatefulWidget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::animation::{EasingFunction, Tween};
use crate::config::DEFAULT_ANIMATION_MS;
use crate::message::Message;
use crate::theme::{with_alpha, Theme, COLLAPSED_ALPHA};

/// Horizontal padding inside the bubble, per side
pub const BUBBLE_PADDING: u16 = 1;

/// Rows taken by the author label
pub const AUTHOR_HEIGHT: u16 = 1;

/// Expand/collapse state for one rendered card
#[derive(Clone, Debug, PartialEq)]
pub struct MessageContentState {
    expanded: bool,
    /// Bubble opacity, `COLLAPSED_ALPHA..=1.0`
    alpha: Tween,
    /// Fraction of the extra body lines revealed, `0.0..=1.0`; linear so
    /// lines arrive at a steady rate
    reveal: Tween,
}

impl MessageContentState {
    /// Collapsed state with the given animation length
    pub fn new(animation: Duration) -> Self {
        Self {
            expanded: false,
            alpha: Tween::settled(COLLAPSED_ALPHA, animation),
            reveal: Tween::settled(0.0, animation).with_easing(EasingFunction::Linear),
        }
    }

    /// Tap: flip between collapsed and expanded
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.alpha.retarget(1.0);
            self.reveal.retarget(1.0);
        } else {
            self.alpha.retarget(COLLAPSED_ALPHA);
            self.reveal.retarget(0.0);
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Advance running animations
    pub fn update(&mut self, delta: Duration) {
        self.alpha.update(delta);
        self.reveal.update(delta);
    }

    /// Skip to the end of running animations
    pub fn finish_animation(&mut self) {
        self.alpha.finish();
        self.reveal.finish();
    }

    pub fn is_animating(&self) -> bool {
        !self.alpha.is_settled() || !self.reveal.is_settled()
    }

    /// Bubble opacity this frame
    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    /// How many of `total` wrapped body lines are visible this frame
    pub fn visible_lines(&self, total: usize) -> usize {
        if total <= 1 {
            return total.max(1);
        }
        let extra = (total - 1) as f32 * self.reveal.value().clamp(0.0, 1.0);
        (1 + extra.ceil() as usize).min(total)
    }
}

impl Default for MessageContentState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ANIMATION_MS))
    }
}

/// Wrap a message body to the bubble's inner width
///
/// Always returns at least one line so an empty body still draws a bubble.
pub fn wrap_body(body: &str, inner_width: usize) -> Vec<String> {
    let inner_width = inner_width.max(1);
    let lines: Vec<String> = textwrap::wrap(body, inner_width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Author label plus body bubble for one message
pub struct MessageContent<'a> {
    message: &'a Message,
    theme: &'a Theme,
    align_end: bool,
    /// Content rows hidden above the area
    skip: usize,
}

impl<'a> MessageContent<'a> {
    pub fn new(message: &'a Message, theme: &'a Theme) -> Self {
        Self {
            message,
            theme,
            align_end: false,
            skip: 0,
        }
    }

    /// Hug the right edge of the area instead of the left
    pub fn align_end(mut self, align_end: bool) -> Self {
        self.align_end = align_end;
        self
    }

    /// Start drawing `rows` rows into the content, for cards scrolled
    /// partly above the viewport
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip = rows;
        self
    }

    /// Rows needed at `width` in the given state
    pub fn height(message: &Message, state: &MessageContentState, width: u16) -> usize {
        let lines = wrap_body(&message.body, inner_width(width));
        AUTHOR_HEIGHT as usize + state.visible_lines(lines.len())
    }

    /// Bubble background this frame
    pub fn bubble_color(&self, state: &MessageContentState) -> Color {
        with_alpha(
            self.theme.bubble(self.message.is_outgoing),
            state.alpha(),
            self.theme.surface,
        )
    }
}

fn inner_width(width: u16) -> usize {
    width.saturating_sub(BUBBLE_PADDING * 2) as usize
}

/// Truncate to at most `width` display columns
fn clip_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

impl<'a> StatefulWidget for MessageContent<'a> {
    type State = MessageContentState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let wrapped = wrap_body(&self.message.body, inner_width(area.width));
        let shown = state.visible_lines(wrapped.len());
        let visible = &wrapped[..shown];

        let author = clip_to_width(&self.message.author, area.width as usize);
        let text_width = visible.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let bubble_width = (text_width + BUBBLE_PADDING * 2).min(area.width);
        let block_width = bubble_width.max(author.width() as u16);

        let x = if self.align_end {
            area.right().saturating_sub(block_width)
        } else {
            area.x
        };

        let author_style = Style::default()
            .fg(self.theme.author)
            .add_modifier(Modifier::BOLD);
        let bubble_style = Style::default()
            .bg(self.bubble_color(state))
            .fg(self.theme.body);

        // Content row 0 is the author label, rows after it the bubble
        for (offset, y) in (area.top()..area.bottom()).enumerate() {
            let row = self.skip + offset;
            if row < AUTHOR_HEIGHT as usize {
                buf.set_string(x, y, &author, author_style);
                continue;
            }
            let Some(line) = visible.get(row - AUTHOR_HEIGHT as usize) else {
                break;
            };
            buf.set_style(Rect::new(x, y, bubble_width, 1), bubble_style);
            let clipped = clip_to_width(line, inner_width(bubble_width));
            buf.set_string(x + BUBBLE_PADDING, y, &clipped, bubble_style);
        }
    }
}
