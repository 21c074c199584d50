use ratatui::style::Color;

use crate::models::Theme;

/// Resolved widget colors for the active theme. Widgets never branch on
/// `Theme` directly; they take a palette and draw with whatever it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub accent: Color,
    pub error: Color,
    pub dim: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
                accent: Color::Blue,
                error: Color::Red,
                dim: Color::DarkGray,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                highlight_bg: Color::Cyan,
                highlight_fg: Color::Black,
                accent: Color::Cyan,
                error: Color::Red,
                dim: Color::DarkGray,
            },
        }
    }
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        Self::for_theme(theme)
    }
}
