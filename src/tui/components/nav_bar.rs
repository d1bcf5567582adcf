//! # NavBar Component
//!
//! One tab per top-level screen, the active one highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::state::Screen;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct NavBar<'a> {
    pub active: Screen,
    pub bookmark_count: usize,
    pub theme: &'a Theme,
}

impl NavBar<'_> {
    fn tab_label(&self, index: usize, screen: Screen) -> String {
        match screen {
            Screen::Bookmarks if self.bookmark_count > 0 => {
                format!(" {} {} ({}) ", index + 1, screen.label(), self.bookmark_count)
            }
            _ => format!(" {} {} ", index + 1, screen.label()),
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(Screen::ALL.len() * 2);
        for (index, screen) in Screen::ALL.into_iter().enumerate() {
            let style = if screen == self.active {
                self.theme.tab_active
            } else {
                self.theme.tab_inactive
            };
            spans.push(Span::styled(self.tab_label(index, screen), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_nav_bar_lists_all_screens_with_count() {
        let theme = Theme::dark();
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav_bar = NavBar {
            active: Screen::Apis,
            bookmark_count: 2,
            theme: &theme,
        };
        terminal.draw(|f| nav_bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("1 Components"));
        assert!(text.contains("2 APIs"));
        assert!(text.contains("3 Bookmarks (2)"));
    }

    #[test]
    fn test_bookmarks_tab_without_count_when_empty() {
        let theme = Theme::dark();
        let nav_bar = NavBar {
            active: Screen::Components,
            bookmark_count: 0,
            theme: &theme,
        };
        assert_eq!(nav_bar.tab_label(2, Screen::Bookmarks), " 3 Bookmarks ");
    }
}
