//! # Theme
//!
//! Palette built once from config and handed to each component as a prop.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub text: Style,
    pub muted: Style,
    pub header: Style,
    pub selected: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub star: Style,
    pub error: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            header: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            tab_active: Style::default().fg(Color::Black).bg(Color::Cyan),
            tab_inactive: Style::default().fg(Color::Gray),
            star: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),
        }
    }

    pub fn light() -> Self {
        Self {
            title: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Black),
            muted: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            tab_active: Style::default().fg(Color::White).bg(Color::Blue),
            tab_inactive: Style::default().fg(Color::DarkGray),
            star: Style::default().fg(Color::Rgb(191, 144, 0)),
            error: Style::default().fg(Color::Red),
        }
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
