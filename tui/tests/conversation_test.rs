//! Integration Tests for the chat list
//!
//! Drive the App the way a user would (keys, mouse, frame ticks) and inspect
//! what lands in an off-screen terminal.
//!
//! # Test Coverage
//!
//! 1. **Scenarios**: single incoming card, outgoing card alignment and color
//! 2. **Conversation**: N messages produce N cards in input order
//! 3. **Expand/collapse**: taps by keyboard and mouse, animation settling
//! 4. **Theme**: light/dark flip

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use chat_bubbles::sample_data::{conversation_sample, preview_message};
use chat_bubbles::theme::{with_alpha, COLLAPSED_ALPHA};
use chat_bubbles::widgets::message_content::wrap_body;
use chat_bubbles::widgets::profile_image::{AVATAR_HEIGHT, AVATAR_WIDTH};
use chat_bubbles::widgets::MessageCard;
use chat_bubbles::{App, AppConfig, Message, Theme, ThemeMode};

// ============================================================================
// Helpers
// ============================================================================

const WIDTH: u16 = 60;

fn config() -> AppConfig {
    AppConfig {
        animation: Duration::from_millis(200),
        ..AppConfig::default()
    }
}

fn terminal(height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, height)).expect("test terminal")
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> Buffer {
    app.render(terminal).expect("render");
    terminal.backend().buffer().clone()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Let every running animation finish
fn settle(app: &mut App) {
    app.tick(Duration::from_secs(1));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_incoming_message_renders_one_collapsed_card() {
    let mut app = App::new(&config(), vec![preview_message()]);
    let mut term = terminal(10);
    let buf = draw(&mut app, &mut term);

    let cards = app.conversation().visible_cards();
    assert_eq!(cards.len(), 1);
    assert!(!app.conversation().card(0).unwrap().is_expanded());

    // avatar on the left, author beside it
    assert_eq!(buf[(1, 0)].symbol(), "╭");
    assert!(row_text(&buf, 0).ends_with("Mario"));

    // exactly one body line
    let card_height = cards[0].area.height;
    assert_eq!(card_height, AVATAR_HEIGHT + 1);
    let content_x = 1 + AVATAR_WIDTH + 1;
    assert_ne!(buf[(content_x, 1)].bg, Theme::light().surface);
    assert_eq!(buf[(content_x, 2)].bg, Theme::light().surface);
}

#[test]
fn test_outgoing_message_is_right_aligned_with_outgoing_color() {
    let msg = Message::outgoing("Me", "Sounds good");
    let mut app = App::new(&config(), vec![msg]);
    let mut term = terminal(10);
    let buf = draw(&mut app, &mut term);

    // avatar hugs the right edge
    assert_eq!(buf[(WIDTH - 2, 0)].symbol(), "╮");
    assert_eq!(buf[(1, 0)].symbol(), " ");

    let theme = Theme::light();
    let bubble = with_alpha(theme.outgoing_bubble, COLLAPSED_ALPHA, theme.surface);
    let last_bubble_cell = WIDTH - 1 - AVATAR_WIDTH - 1 - 1;
    assert_eq!(buf[(last_bubble_cell, 1)].bg, bubble);
    assert!(row_text(&buf, 1).ends_with("Sounds good  │•‿•│"));
}

// ============================================================================
// Conversation
// ============================================================================

#[test]
fn test_every_sample_message_gets_a_card_in_order() {
    let messages = conversation_sample().to_vec();
    let total: usize = messages
        .iter()
        .map(|m| MessageCard::height(m, &Default::default(), WIDTH))
        .sum();
    let mut app = App::new(&config(), messages.clone());
    let mut term = terminal(total as u16 + 1);
    draw(&mut app, &mut term);

    let indices: Vec<usize> = app
        .conversation()
        .visible_cards()
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(indices, (0..messages.len()).collect::<Vec<_>>());

    let tops: Vec<u16> = app
        .conversation()
        .visible_cards()
        .iter()
        .map(|c| c.area.y)
        .collect();
    assert!(tops.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_small_terminal_materializes_only_visible_cards() {
    let mut app = App::new(&config(), conversation_sample().to_vec());
    let mut term = terminal(9);
    draw(&mut app, &mut term);

    let visible = app.conversation().visible_cards().len();
    assert!(visible < conversation_sample().len());
    assert_eq!(visible, 2);
}

#[test]
fn test_end_and_home_scroll() {
    let mut app = App::new(&config(), conversation_sample().to_vec());
    let mut term = terminal(9);
    draw(&mut app, &mut term);

    app.handle_key(key(KeyCode::End));
    draw(&mut app, &mut term);
    let last = app.conversation().visible_cards().last().unwrap().index;
    assert_eq!(last, conversation_sample().len() - 1);
    assert_eq!(
        app.conversation().scroll_offset(),
        app.conversation().max_scroll()
    );

    app.handle_key(key(KeyCode::Home));
    draw(&mut app, &mut term);
    assert_eq!(app.conversation().visible_cards()[0].index, 0);
}

// ============================================================================
// Expand / collapse
// ============================================================================

#[test]
fn test_enter_expands_and_collapses_selected_card() {
    let body = "List of Android versions:\nKitKat\nLollipop\nMarshmallow\nNougat";
    let mut app = App::new(&config(), vec![Message::new("Mario", body)]);
    let mut term = terminal(20);
    draw(&mut app, &mut term);
    let collapsed_height = app.conversation().visible_cards()[0].area.height;

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.conversation().selected(), Some(0));
    assert!(app.conversation().is_animating());
    settle(&mut app);
    draw(&mut app, &mut term);

    let card = app.conversation().card(0).unwrap();
    assert!(card.is_expanded());
    assert_eq!(card.alpha(), 1.0);
    let lines = wrap_body(body, (MessageCard::content_width(WIDTH, false) - 2) as usize);
    let expanded_height = app.conversation().visible_cards()[0].area.height;
    assert_eq!(expanded_height, 1 + lines.len() as u16 + 1);

    app.handle_key(key(KeyCode::Char(' ')));
    settle(&mut app);
    draw(&mut app, &mut term);

    let card = app.conversation().card(0).unwrap();
    assert!(!card.is_expanded());
    assert_eq!(card.alpha(), COLLAPSED_ALPHA);
    assert_eq!(
        app.conversation().visible_cards()[0].area.height,
        collapsed_height
    );
}

#[test]
fn test_animation_is_gradual() {
    let body = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight";
    let mut app = App::new(&config(), vec![Message::new("Mario", body)]);
    let mut term = terminal(20);
    draw(&mut app, &mut term);

    app.handle_key(key(KeyCode::Enter));
    app.tick(Duration::from_millis(50));
    draw(&mut app, &mut term);

    let card = app.conversation().card(0).unwrap();
    assert!(card.is_animating());
    assert!(card.alpha() > COLLAPSED_ALPHA && card.alpha() < 1.0);
    let shown = card.visible_lines(8);
    assert!(shown > 1 && shown < 8, "shown {}", shown);
}

#[test]
fn test_click_toggles_card_under_cursor() {
    let messages = vec![
        Message::new("Mario", "first message with enough words to need wrapping"),
        Message::outgoing("Me", "second"),
    ];
    let mut app = App::new(&config(), messages);
    let mut term = terminal(20);
    draw(&mut app, &mut term);

    let second = app.conversation().visible_cards()[1];
    app.handle_event(click(WIDTH / 2, second.area.y + 1));

    assert_eq!(app.conversation().selected(), Some(1));
    assert!(app.conversation().card(1).unwrap().is_expanded());
    assert!(!app.conversation().card(0).unwrap().is_expanded());

    // clicking empty space below the cards does nothing
    app.handle_event(click(WIDTH / 2, 18));
    assert!(app.conversation().card(1).unwrap().is_expanded());

    // nor does clicking the avatar beside a bubble
    app.handle_event(click(2, 1));
    assert!(!app.conversation().card(0).unwrap().is_expanded());
}

#[test]
fn test_arrow_keys_move_selection() {
    let mut app = App::new(&config(), conversation_sample().to_vec());
    let mut term = terminal(20);
    draw(&mut app, &mut term);

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.conversation().selected(), Some(1));
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.conversation().selected(), Some(0));
}

// ============================================================================
// Theme & lifecycle
// ============================================================================

#[test]
fn test_theme_flip_changes_surface() {
    let mut app = App::new(&config(), vec![preview_message()]);
    let mut term = terminal(10);

    let light = draw(&mut app, &mut term);
    assert_eq!(light[(0, 5)].bg, Theme::light().surface);

    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.theme().mode, ThemeMode::Dark);
    let dark = draw(&mut app, &mut term);
    assert_eq!(dark[(0, 5)].bg, Theme::dark().surface);
}

#[test]
fn test_status_bar_reports_theme() {
    let mut app = App::new(&config(), conversation_sample().to_vec());
    let mut term = terminal(10);
    let buf = draw(&mut app, &mut term);

    assert!(row_text(&buf, 9).starts_with(" light | 12 messages"));
}

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Esc),
        key(KeyCode::Char('q')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = App::new(&config(), vec![preview_message()]);
        assert!(app.is_running());
        app.handle_key(event);
        assert!(!app.is_running());
    }
}
