//! Configuration
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Default values
//!
//! # Environment
//!
//! - `CHAT_BUBBLES_THEME` - `light` or `dark`
//! - `CHAT_BUBBLES_ANIMATION_MS` - expand/collapse animation length
//! - `CHAT_BUBBLES_FRAME_MS` - render loop frame budget

use std::time::Duration;

use thiserror::Error;

use crate::theme::ThemeMode;

/// Default expand/collapse animation length
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Default frame budget (~30 FPS)
pub const DEFAULT_FRAME_MS: u64 = 33;

/// Longest frame we accept; anything slower makes animations unreadable
pub const MAX_FRAME_MS: u64 = 1000;

pub const ENV_THEME: &str = "CHAT_BUBBLES_THEME";
pub const ENV_ANIMATION_MS: &str = "CHAT_BUBBLES_ANIMATION_MS";
pub const ENV_FRAME_MS: &str = "CHAT_BUBBLES_FRAME_MS";

/// Errors that can occur when resolving configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown theme name
    #[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
    InvalidTheme(String),

    /// A numeric setting that failed to parse
    #[error("Invalid value for {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    /// Out-of-range value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Resolved application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Palette on startup
    pub theme: ThemeMode,
    /// Expand/collapse animation length
    pub animation: Duration,
    /// Render loop frame budget
    pub frame: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            animation: Duration::from_millis(DEFAULT_ANIMATION_MS),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

impl AppConfig {
    /// Load from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Bad values are logged and replaced by their default so a typo in the
    /// environment never keeps the UI from starting.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_THEME) {
            match raw.parse() {
                Ok(theme) => config.theme = theme,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_THEME, e),
            }
        }

        if let Some(raw) = lookup(ENV_ANIMATION_MS) {
            match parse_millis(ENV_ANIMATION_MS, &raw) {
                Ok(ms) => config.animation = Duration::from_millis(ms),
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_ANIMATION_MS, e),
            }
        }

        if let Some(raw) = lookup(ENV_FRAME_MS) {
            match parse_millis(ENV_FRAME_MS, &raw).and_then(validate_frame_ms) {
                Ok(ms) => config.frame = Duration::from_millis(ms),
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_FRAME_MS, e),
            }
        }

        config
    }

    /// Apply CLI overrides on top of this configuration
    pub fn with_overrides(mut self, theme: Option<ThemeMode>, animation_ms: Option<u64>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(ms) = animation_ms {
            self.animation = Duration::from_millis(ms);
        }
        self
    }
}

fn parse_millis(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}

fn validate_frame_ms(ms: u64) -> Result<u64, ConfigError> {
    if ms == 0 || ms > MAX_FRAME_MS {
        return Err(ConfigError::ValidationError(format!(
            "frame length must be between 1 and {} ms, got {}",
            MAX_FRAME_MS, ms
        )));
    }
    Ok(ms)
}
