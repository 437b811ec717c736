//! Previews
//!
//! Off-screen renders of a single card and of the whole conversation under
//! both palettes. Used by `--preview` and by the rendering tests; no terminal
//! is needed.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;

use crate::message::Message;
use crate::sample_data::{conversation_sample, preview_message};
use crate::theme::{Theme, ThemeMode};
use crate::widgets::{Conversation, ConversationState, MessageCard, MessageContentState};

/// Default preview width in cells
pub const PREVIEW_WIDTH: u16 = 60;

/// Render one card on the theme's surface
pub fn render_card(
    message: &Message,
    theme: &Theme,
    state: &mut MessageContentState,
    width: u16,
) -> Buffer {
    let height = MessageCard::height(message, state, width);
    let area = Rect::new(0, 0, width, clamp_rows(height));
    let mut buf = Buffer::empty(area);
    buf.set_style(area, Style::default().bg(theme.surface));
    MessageCard::new(message, theme).render(area, &mut buf, state);
    buf
}

/// Render a conversation tall enough to show every card
pub fn render_conversation(
    messages: &[Message],
    theme: &Theme,
    state: &mut ConversationState,
    width: u16,
) -> Buffer {
    state.sync_len(messages.len());
    let height: usize = messages
        .iter()
        .enumerate()
        .filter_map(|(i, msg)| {
            state
                .card(i)
                .map(|card| MessageCard::height(msg, card, width))
        })
        .sum();
    let area = Rect::new(0, 0, width, clamp_rows(height).max(1));
    let mut buf = Buffer::empty(area);
    Conversation::new(messages, theme).render(area, &mut buf, state);
    buf
}

/// Buffers top out at `u16::MAX` rows; anything taller is cut off
fn clamp_rows(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Plain-text rows of a buffer, trailing blanks trimmed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buf[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Light and dark renders of the preview card followed by the sample
/// conversation, as printable text
pub fn preview_text(width: u16) -> String {
    let mut out = String::new();
    let message = preview_message();

    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let theme = Theme::for_mode(mode);
        let mut state = MessageContentState::default();
        let buf = render_card(&message, &theme, &mut state, width);
        out.push_str(&format!("== {} ==\n", mode.label()));
        for line in buffer_lines(&buf) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    let theme = Theme::light();
    let mut state = ConversationState::default();
    let buf = render_conversation(conversation_sample(), &theme, &mut state, width);
    out.push_str("== Conversation ==\n");
    for line in buffer_lines(&buf) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{with_alpha, COLLAPSED_ALPHA};

    #[test]
    fn test_card_preview_text() {
        let theme = Theme::light();
        let mut state = MessageContentState::default();
        let buf = render_card(&preview_message(), &theme, &mut state, 40);
        let lines = buffer_lines(&buf);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " ╭───╮ Mario");
        assert_eq!(lines[1], " │•‿•│  Hey,");
        assert_eq!(lines[2], " ╰───╯");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_light_and_dark_differ_only_in_palette() {
        let message = preview_message();
        let mut state = MessageContentState::default();
        let light = render_card(&message, &Theme::light(), &mut state, 40);
        let dark = render_card(&message, &Theme::dark(), &mut state, 40);

        assert_eq!(buffer_lines(&light), buffer_lines(&dark));
        assert_ne!(light, dark);
        assert_eq!(light[(0, 0)].bg, Theme::light().surface);
        assert_eq!(dark[(0, 0)].bg, Theme::dark().surface);
        assert_eq!(
            dark[(8, 1)].bg,
            with_alpha(Theme::dark().incoming_bubble, COLLAPSED_ALPHA, Theme::dark().surface)
        );
    }

    #[test]
    fn test_preview_text_sections() {
        let text = preview_text(PREVIEW_WIDTH);
        assert!(text.starts_with("== Light Mode ==\n"));
        assert!(text.contains("== Dark Mode ==\n"));
        assert!(text.contains("== Conversation ==\n"));
        assert!(text.contains("Mario"));
    }

    #[test]
    fn test_conversation_preview_shows_every_card() {
        let mut state = ConversationState::default();
        render_conversation(
            conversation_sample(),
            &Theme::light(),
            &mut state,
            PREVIEW_WIDTH,
        );
        assert_eq!(state.visible_cards().len(), conversation_sample().len());
    }

    #[test]
    fn test_clamp_rows_saturates() {
        assert_eq!(clamp_rows(12), 12);
        assert_eq!(clamp_rows(70_002), u16::MAX);
    }
}
