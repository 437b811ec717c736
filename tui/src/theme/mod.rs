//! Theme and Colors
//!
//! Light and dark palettes for the chat list, plus the color math used to
//! fake opacity on a terminal (which has no alpha channel).

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use crate::config::ConfigError;

// ============================================================================
// Palette
// ============================================================================

/// Light surface behind the conversation
pub const SURFACE_LIGHT: Color = Color::Rgb(0xE5, 0xE7, 0xE9);

/// Dark surface behind the conversation
pub const SURFACE_DARK: Color = Color::Rgb(0x1C, 0x1B, 0x1F);

/// Bubble color for messages from the local user
pub const OUTGOING_BUBBLE: Color = Color::Rgb(0x56, 0x65, 0x73);

/// Bubble color for everyone else
pub const INCOMING_BUBBLE: Color = Color::Rgb(0x00, 0x00, 0xFF);

/// Body text inside a bubble
pub const BODY_WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Author label on a light surface
pub const AUTHOR_BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Author label on a dark surface
pub const AUTHOR_LIGHT: Color = Color::Rgb(0xE6, 0xE1, 0xE5);

/// Avatar ring, light theme (purple grey)
pub const RING_LIGHT: Color = Color::Rgb(0x62, 0x5B, 0x71);

/// Avatar ring, dark theme (purple grey 80)
pub const RING_DARK: Color = Color::Rgb(0xCC, 0xC2, 0xDC);

/// Avatar face
pub const AVATAR_SKIN: Color = Color::Rgb(0xF1, 0xC2, 0x7D);

/// Avatar features
pub const AVATAR_FEATURES: Color = Color::Rgb(0x40, 0x28, 0x18);

/// Selection marker
pub const SELECTION_PURPLE: Color = Color::Rgb(0xD0, 0xBC, 0xFF);

/// Status bar text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Opacity of a collapsed bubble
pub const COLLAPSED_ALPHA: f32 = 0.7;

// ============================================================================
// Theme
// ============================================================================

/// Which palette is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Preview label
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "day" => Ok(Self::Light),
            "dark" | "night" => Ok(Self::Dark),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// Resolved colors for one mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub surface: Color,
    pub author: Color,
    pub body: Color,
    pub incoming_bubble: Color,
    pub outgoing_bubble: Color,
    pub avatar_ring: Color,
    pub selection: Color,
    pub status: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            surface: SURFACE_LIGHT,
            author: AUTHOR_BLACK,
            body: BODY_WHITE,
            incoming_bubble: INCOMING_BUBBLE,
            outgoing_bubble: OUTGOING_BUBBLE,
            avatar_ring: RING_LIGHT,
            selection: RING_LIGHT,
            status: DIM_GRAY,
        }
    }

    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            surface: SURFACE_DARK,
            author: AUTHOR_LIGHT,
            body: BODY_WHITE,
            incoming_bubble: INCOMING_BUBBLE,
            outgoing_bubble: OUTGOING_BUBBLE,
            avatar_ring: RING_DARK,
            selection: SELECTION_PURPLE,
            status: DIM_GRAY,
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Bubble color for a message direction
    pub fn bubble(&self, is_outgoing: bool) -> Color {
        if is_outgoing {
            self.outgoing_bubble
        } else {
            self.incoming_bubble
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

// ============================================================================
// Color math
// ============================================================================

/// RGB components of a palette color
fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    }
}

/// Linear interpolation between two colors, `t` in 0.0..=1.0
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = rgb(from);
    let (r2, g2, b2) = rgb(to);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// `color` drawn at `alpha` opacity over `background`
pub fn with_alpha(color: Color, alpha: f32, background: Color) -> Color {
    lerp_color(background, color, alpha)
}
