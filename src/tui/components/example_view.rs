//! # Example View Component
//!
//! Detail page for a single example: name, owning module, bookmark state
//! and the wrapped description.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ExampleView<'a> {
    pub module_title: &'a str,
    pub example_name: &'a str,
    /// `None` when the example is missing from the catalog.
    pub description: Option<&'a str>,
    pub is_bookmarked: bool,
    pub theme: &'a Theme,
}

impl ExampleView<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let star = if self.is_bookmarked { "★ bookmarked" } else { "☆ press b to bookmark" };
        let mut lines = vec![
            Line::from(Span::styled(self.example_name.to_string(), self.theme.title)),
            Line::from(vec![
                Span::styled(format!("{} · ", self.module_title), self.theme.muted),
                Span::styled(star, self.theme.star),
            ]),
            Line::default(),
        ];
        match self.description {
            Some(text) => lines.extend(
                textwrap::wrap(text, width.max(1))
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l.into_owned(), self.theme.text))),
            ),
            None => lines.push(Line::from(Span::styled(
                "This example is no longer in the catalog.",
                self.theme.error,
            ))),
        }
        lines
    }
}

impl Component for ExampleView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.muted)
            .padding(Padding::new(2, 2, 1, 0));
        let width = block.inner(area).width as usize;
        frame.render_widget(Paragraph::new(self.lines(width)).block(block), area);
    }
}
