//! # TitleBar Component
//!
//! Top line showing where the user is.
//!
//! Purely presentational: all data arrives as props.
//!
//! 1. **Example open**: `"Showcase | Button › basic usage"`
//! 2. **Module open**: `"Showcase | Button"`
//! 3. **Catalog list**: `"Showcase | Components"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar<'a> {
    /// Module title snapshot, or the screen label when no module is open
    pub heading: &'a str,
    /// Open example, if any
    pub example: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(heading: &'a str, example: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            heading,
            example,
            theme,
        }
    }

    fn text(&self) -> String {
        match self.example {
            Some(example) => format!("Showcase | {} › {}", self.heading, example),
            None => format!("Showcase | {}", self.heading),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(self.text(), self.theme.title));
        frame.render_widget(line, area);
    }
}
