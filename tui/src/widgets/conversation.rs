//! Conversation Widget
//!
//! A virtualized vertical list of [`MessageCard`]s. Every frame the card
//! heights are measured, but only the cards that intersect the viewport are
//! drawn. A card cut by the top edge is drawn starting from its first visible
//! row, so a card of any height costs at most one viewport of drawing.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;

use super::message_card::MessageCard;
use super::message_content::MessageContentState;
use crate::config::DEFAULT_ANIMATION_MS;
use crate::message::Message;
use crate::theme::Theme;

/// Glyph drawn in the left padding column of the selected card
pub const SELECTION_MARKER: &str = "▌";

/// A card that made it on screen during the last render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleCard {
    /// Position in the message list
    pub index: usize,
    /// Screen rows the card occupies (clipped to the viewport)
    pub area: Rect,
    /// Author and bubble column within `area`; the tap target
    pub content: Rect,
    /// Card rows hidden above the viewport
    pub clipped_top: usize,
}

/// Scroll position, selection and per-card expand state
#[derive(Clone, Debug)]
pub struct ConversationState {
    cards: Vec<MessageContentState>,
    /// Rows scrolled past the top of the list
    scroll: usize,
    selected: Option<usize>,
    /// Scroll the selection into view on the next render
    reveal_selected: bool,
    animation: Duration,
    /// Filled in by render
    visible: Vec<VisibleCard>,
    viewport_height: u16,
    content_height: usize,
}

impl ConversationState {
    pub fn new(animation: Duration) -> Self {
        Self {
            cards: Vec::new(),
            scroll: 0,
            selected: None,
            reveal_selected: false,
            animation,
            visible: Vec::new(),
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Match the number of card states to the message list
    ///
    /// New cards start collapsed; cards past the end are dropped along with
    /// their state.
    pub fn sync_len(&mut self, len: usize) {
        let animation = self.animation;
        self.cards
            .resize_with(len, || MessageContentState::new(animation));
        if let Some(selected) = self.selected {
            if selected >= len {
                self.selected = len.checked_sub(1);
            }
        }
    }

    /// State of one card
    pub fn card(&self, index: usize) -> Option<&MessageContentState> {
        self.cards.get(index)
    }

    /// Tap a card
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.toggle();
                tracing::debug!(index, expanded = card.is_expanded(), "Toggled card");
                true
            }
            None => false,
        }
    }

    /// Tap the selected card
    pub fn toggle_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => {
                self.reveal_selected = true;
                self.toggle(index)
            }
            None => false,
        }
    }

    /// Advance every card's animation
    pub fn update(&mut self, delta: Duration) {
        for card in &mut self.cards {
            card.update(delta);
        }
    }

    /// Any card mid-animation?
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|c| c.is_animating())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.cards.len());
        self.reveal_selected = self.selected.is_some();
    }

    /// Move the selection down, starting from the first visible card
    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(i) => (i + 1).min(self.cards.len().saturating_sub(1)),
            None => self.first_visible().unwrap_or(0),
        };
        self.select(Some(next));
    }

    /// Move the selection up, starting from the last visible card
    pub fn select_previous(&mut self) {
        let previous = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.visible.last().map(|c| c.index).unwrap_or(0),
        };
        self.select(Some(previous));
    }

    /// Scroll by `delta` rows (positive = down); clamped on render
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.reveal_selected = false;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.reveal_selected = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = usize::MAX;
        self.reveal_selected = false;
    }

    /// Rows scrolled past the top
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Largest meaningful scroll offset as of the last render
    pub fn max_scroll(&self) -> usize {
        self.content_height
            .saturating_sub(self.viewport_height as usize)
    }

    /// Height of the viewport as of the last render
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Cards drawn by the last render, top to bottom
    pub fn visible_cards(&self) -> &[VisibleCard] {
        &self.visible
    }

    fn first_visible(&self) -> Option<usize> {
        self.visible
            .iter()
            .find(|c| c.clipped_top == 0)
            .or(self.visible.first())
            .map(|c| c.index)
    }

    /// Card whose content column is under a screen position, for mouse taps
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        self.visible
            .iter()
            .find(|c| c.content.contains((x, y).into()))
            .map(|c| c.index)
    }

    /// Adjust scroll so the selected card is fully visible
    fn reveal(&mut self, heights: &[usize]) {
        let Some(selected) = self.selected else {
            return;
        };
        let top: usize = heights[..selected].iter().sum();
        let height = heights[selected];
        let viewport = self.viewport_height as usize;

        if top < self.scroll {
            self.scroll = top;
        } else if top + height > self.scroll + viewport {
            // tall cards show their top rather than their tail
            self.scroll = (top + height).saturating_sub(viewport).min(top);
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ANIMATION_MS))
    }
}

/// The message list
pub struct Conversation<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
}

impl<'a> Conversation<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl<'a> StatefulWidget for Conversation<'a> {
    type State = ConversationState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        let surface = Style::default().bg(self.theme.surface);
        buf.set_style(area, surface);

        state.sync_len(self.messages.len());
        state.visible.clear();
        state.viewport_height = area.height;

        let heights: Vec<usize> = self
            .messages
            .iter()
            .zip(&state.cards)
            .map(|(msg, card)| MessageCard::height(msg, card, area.width))
            .collect();
        state.content_height = heights.iter().sum();

        if state.reveal_selected {
            state.reveal(&heights);
            state.reveal_selected = false;
        }
        state.scroll = state.scroll.min(state.max_scroll());

        if area.is_empty() {
            return;
        }

        let viewport_top = state.scroll;
        let viewport_bottom = viewport_top + area.height as usize;
        let mut top = 0usize;

        for (index, (message, &height)) in self.messages.iter().zip(&heights).enumerate() {
            let bottom = top + height;
            if bottom <= viewport_top {
                top = bottom;
                continue;
            }
            if top >= viewport_bottom {
                break;
            }

            let clipped_top = viewport_top.saturating_sub(top);
            let first_row = (top.max(viewport_top) - viewport_top) as u16;
            let rows = (bottom.min(viewport_bottom) - top.max(viewport_top)) as u16;
            let card_area = Rect::new(area.x, area.y + first_row, area.width, rows);

            MessageCard::new(message, self.theme)
                .skip_rows(clipped_top)
                .render(card_area, buf, &mut state.cards[index]);

            if state.selected == Some(index) {
                for y in card_area.top()..card_area.bottom() {
                    buf.set_string(
                        card_area.x,
                        y,
                        SELECTION_MARKER,
                        Style::default().fg(self.theme.selection),
                    );
                }
            }

            state.visible.push(VisibleCard {
                index,
                area: card_area,
                content: MessageCard::layout(card_area, message.is_outgoing).content,
                clipped_top,
            });
            top = bottom;
        }
    }
}
