//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for the focused input
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Form border while editing an existing comment
    pub edit_border: Color,
    /// Alert box accent
    pub alert: Color,
    /// Comment title color
    pub title: Color,
    /// Comment body color
    pub description: Color,
    /// Background of the selected list row
    pub selection_bg: Color,
    /// Title bar background
    pub bar_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            edit_border: Color::Yellow,
            alert: Color::Blue,
            title: Color::White,
            description: Color::Gray,
            selection_bg: Color::DarkGray,
            bar_bg: Color::Blue,
        }
    }
}

impl Theme {
    /// Look up a named theme; unknown names fall back to the default
    pub fn by_name(name: &str) -> Self {
        match name {
            "plain" => Self::plain(),
            _ => Self::default(),
        }
    }

    /// Monochrome theme for low-color terminals
    pub fn plain() -> Self {
        Self {
            focus_border: Color::White,
            unfocus_border: Color::Gray,
            edit_border: Color::White,
            alert: Color::Gray,
            title: Color::White,
            description: Color::Gray,
            selection_bg: Color::Gray,
            bar_bg: Color::Black,
        }
    }
}
