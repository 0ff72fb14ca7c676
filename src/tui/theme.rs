//! Theme system for consistent screen colors across dark and light modes.
//!
//! Colors are semantic: widgets ask for `accent` or `sacred`, never for a
//! concrete color. The OS appearance is detected when the mode is `Auto`.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::render::Badge;

/// Semantic color theme for the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Chrome
    /// Borders, headings, and the active tab
    pub primary: Color,
    /// Cursor, underline, and focus states
    pub accent: Color,
    /// Status messages after a successful action
    pub success: Color,
    /// Fallback and warning messages
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Subtitles and energy tags
    pub text_secondary: Color,
    /// Descriptions, hints, and inactive tabs
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Selected card background
    pub highlight_bg: Color,
    /// Popups and elevated panels
    pub surface: Color,

    // Badges
    /// Sacred badge
    pub sacred: Color,
    /// Popular badge
    pub popular: Color,
    /// Pro badge
    pub pro: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured mode to a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Night sky palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(186, 150, 255),
            accent: Color::Rgb(255, 205, 96),
            success: Color::Green,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Rgb(200, 190, 230),
            text_muted: Color::DarkGray,

            background: Color::Rgb(12, 10, 28),
            highlight_bg: Color::Rgb(44, 36, 82),
            surface: Color::Rgb(26, 22, 52),

            sacred: Color::Rgb(255, 205, 96),
            popular: Color::Rgb(255, 120, 170),
            pro: Color::Rgb(120, 200, 255),
        }
    }

    /// Parchment palette. Text colors keep at least 4.5:1 contrast.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(88, 40, 160),
            accent: Color::Rgb(170, 95, 0),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 90, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(70, 50, 110),
            text_muted: Color::Rgb(110, 110, 110),

            background: Color::Rgb(252, 248, 238),
            highlight_bg: Color::Rgb(236, 226, 250),
            surface: Color::Rgb(244, 238, 226),

            sacred: Color::Rgb(150, 90, 0),
            popular: Color::Rgb(180, 30, 100),
            pro: Color::Rgb(0, 90, 160),
        }
    }

    /// Color for a card badge.
    #[must_use]
    pub const fn badge(&self, badge: Badge) -> Color {
        match badge {
            Badge::Sacred => self.sacred,
            Badge::Popular => self.popular,
            Badge::Pro => self.pro,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_badge_colors_distinct() {
        let theme = Theme::dark();
        assert_ne!(theme.badge(Badge::Sacred), theme.badge(Badge::Popular));
        assert_ne!(theme.badge(Badge::Popular), theme.badge(Badge::Pro));
        assert_ne!(theme.badge(Badge::Sacred), theme.badge(Badge::Pro));
    }

    #[test]
    fn test_theme_detect() {
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
