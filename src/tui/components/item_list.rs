//! # Item List Component
//!
//! Sectioned, selectable list of catalog items. Used for the catalog
//! screens, the bookmarks screen and a module's landing view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state
//!
//! Section headers are rendered as rows but never selected; `selected`
//! indexes items only.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::curator::{CatalogItem, Section};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const STAR_ON: &str = "★";
const STAR_OFF: &str = "☆";

/// Persistent state for the item list.
#[derive(Default)]
pub struct ItemListState {
    pub sections: Vec<Section>,
    pub selected: usize,
    pub list_state: ListState,
}

impl ItemListState {
    /// Replace the displayed sections. `reset` moves the selection back to
    /// the first item (used after navigating somewhere new); otherwise the
    /// selection is clamped to the new item count.
    pub fn sync(&mut self, sections: Vec<Section>, reset: bool) {
        self.sections = sections;
        let len = self.item_count();
        self.selected = if reset || len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .nth(self.selected)
    }

    /// Row index of the selected item once headers are interleaved.
    fn selected_row(&self) -> Option<usize> {
        let mut remaining = self.selected;
        let mut row = 0;
        for section in self.sections.iter().filter(|s| !s.is_empty()) {
            row += 1; // header
            if remaining < section.items.len() {
                return Some(row + remaining);
            }
            remaining -= section.items.len();
            row += section.items.len();
        }
        None
    }
}

/// Events emitted by the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Open(CatalogItem),
    ToggleBookmark(CatalogItem),
}

impl EventHandler for ItemListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let len = self.item_count();
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                None
            }
            TuiEvent::Submit => self.selected_item().cloned().map(ListEvent::Open),
            TuiEvent::ToggleBookmark => self.selected_item().cloned().map(ListEvent::ToggleBookmark),
            _ => None,
        }
    }
}

/// Transient render wrapper for the item list.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    theme: &'a Theme,
    /// Shown when every section is empty
    empty_message: &'a str,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, theme: &'a Theme, empty_message: &'a str) -> Self {
        Self {
            state,
            theme,
            empty_message,
        }
    }

    fn item_line(&self, item: &CatalogItem, is_selected: bool, width: usize) -> Line<'static> {
        let star = if item.is_bookmarked { STAR_ON } else { STAR_OFF };
        // "★ " + title + "  " + subtitle
        let fixed = 2 + 2 + item.subtitle.width();
        let title = truncate_to_width(&item.title, width.saturating_sub(fixed));
        let padded = format!(
            "{}{}",
            title,
            " ".repeat(width.saturating_sub(fixed + title.width()))
        );

        let (text_style, muted_style) = if is_selected {
            (self.theme.selected, self.theme.selected)
        } else {
            (self.theme.text, self.theme.muted)
        };
        let star_style = if is_selected { self.theme.selected } else { self.theme.star };

        Line::from(vec![
            Span::styled(format!("{star} "), star_style),
            Span::styled(padded, text_style),
            Span::styled("  ", text_style),
            Span::styled(item.subtitle.clone(), muted_style),
        ])
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.muted)
            .padding(Padding::horizontal(1));

        if self.state.item_count() == 0 {
            let empty = Paragraph::new(self.empty_message)
                .style(self.theme.muted)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(2) as usize;
        let mut rows: Vec<ListItem> = Vec::new();
        let mut index = 0;
        for section in self.state.sections.iter().filter(|s| !s.is_empty()) {
            rows.push(ListItem::new(Line::from(Span::styled(
                section.title.clone(),
                self.theme.header,
            ))));
            for item in &section.items {
                rows.push(ListItem::new(self.item_line(
                    item,
                    index == self.state.selected,
                    width,
                )));
                index += 1;
            }
        }

        let selected_row = self.state.selected_row();
        self.state.list_state.select(selected_row);
        let list = List::new(rows).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate `s` to at most `max_width` terminal columns, adding "..." if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
