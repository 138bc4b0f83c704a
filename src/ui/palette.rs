//! Colors for the dark and light themes

use ratatui::style::{Color, Modifier, Style};

use crate::prefs::Theme;

/// Colors used by every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub price: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                price: Color::Green,
                error: Color::Red,
                success: Color::Green,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                price: Color::Rgb(0, 110, 0),
                error: Color::Red,
                success: Color::Rgb(0, 110, 0),
            },
        }
    }

    /// Base style for a whole screen
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_eq!(dark.background, Color::Black);
        assert_eq!(light.background, Color::White);
    }
}
