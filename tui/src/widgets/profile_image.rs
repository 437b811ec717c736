//! ProfileImage Widget
//!
//! A fixed avatar drawn with box-drawing glyphs: a rounded ring in the
//! theme's secondary color around a small face.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::{AVATAR_FEATURES, AVATAR_SKIN};

/// Avatar width in terminal cells
pub const AVATAR_WIDTH: u16 = 5;

/// Avatar height in terminal cells
pub const AVATAR_HEIGHT: u16 = 3;

/// Which part of the avatar a glyph belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Ring,
    Face,
}

/// (glyph, part) rows, clipped to the ring's rounded corners
const GLYPHS: [[(char, Part); AVATAR_WIDTH as usize]; AVATAR_HEIGHT as usize] = [
    [
        ('╭', Part::Ring),
        ('─', Part::Ring),
        ('─', Part::Ring),
        ('─', Part::Ring),
        ('╮', Part::Ring),
    ],
    [
        ('│', Part::Ring),
        ('•', Part::Face),
        ('‿', Part::Face),
        ('•', Part::Face),
        ('│', Part::Ring),
    ],
    [
        ('╰', Part::Ring),
        ('─', Part::Ring),
        ('─', Part::Ring),
        ('─', Part::Ring),
        ('╯', Part::Ring),
    ],
];

/// The avatar shown next to every message
pub struct ProfileImage {
    ring: Color,
    /// Glyph rows hidden above the area
    skip: usize,
}

impl ProfileImage {
    pub fn new(ring: Color) -> Self {
        Self { ring, skip: 0 }
    }

    /// Start drawing `rows` rows into the avatar
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip = rows;
        self
    }
}

impl Widget for ProfileImage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for (row, glyphs) in GLYPHS.iter().skip(self.skip).enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, (ch, part)) in glyphs.iter().enumerate() {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                let style = match part {
                    Part::Ring => Style::default().fg(self.ring),
                    Part::Face => Style::default().fg(AVATAR_FEATURES).bg(AVATAR_SKIN),
                };
                buf[(x, y)].set_char(*ch).set_style(style);
            }
        }
    }
}
