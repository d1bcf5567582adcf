use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::catalog::Registry;
use crate::core::state::{NavigationState, Screen};
use crate::tui::component::Component;
use crate::tui::components::{ExampleView, ItemList, NavBar, TitleBar};
use crate::tui::theme::Theme;
use crate::tui::{TuiState, active_example_ref};

pub fn draw_ui(frame: &mut Frame, state: &NavigationState, registry: &Registry, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, nav_area, main_area, help_area] = layout.areas(frame.area());
    let theme = tui.theme;

    let heading = state
        .active_module_title
        .as_deref()
        .unwrap_or_else(|| state.screen.label());
    TitleBar::new(heading, state.active_module_example_key.as_deref(), &theme)
        .render(frame, title_area);

    NavBar {
        active: state.screen,
        bookmark_count: state.bookmarks.len(),
        theme: &theme,
    }
    .render(frame, nav_area);

    // Main area: error, loading placeholder, example detail, or a list
    if let Some(error_msg) = &tui.load_error {
        draw_error_view(frame, main_area, error_msg, &theme);
    } else if !registry.is_ready() {
        draw_loading_view(frame, main_area, &theme);
    } else if let Some(example) = state.active_module_example_key.as_deref() {
        draw_example(frame, main_area, state, registry, example, &theme);
    } else {
        let empty_message = empty_message(state);
        ItemList::new(&mut tui.list, &theme, empty_message).render(frame, main_area);
    }

    frame.render_widget(
        Line::from(Span::styled(help_text(state), theme.muted)),
        help_area,
    );
}

fn draw_example(
    frame: &mut Frame,
    area: Rect,
    state: &NavigationState,
    registry: &Registry,
    example: &str,
    theme: &Theme,
) {
    let found = registry.catalog().ok().and_then(|catalog| {
        let module = catalog.module(state.active_module_key.as_deref()?)?;
        module.example(example)
    });
    let description = found.map(|e| {
        e.description
            .as_deref()
            .unwrap_or("No description provided.")
    });
    let is_bookmarked = active_example_ref(state, registry)
        .is_some_and(|item| state.bookmarks.contains(&item));

    ExampleView {
        module_title: state.active_module_title.as_deref().unwrap_or_default(),
        example_name: example,
        description,
        is_bookmarked,
        theme,
    }
    .render(frame, area);
}

fn empty_message(state: &NavigationState) -> &'static str {
    if state.can_go_back() {
        return "This module has no examples.";
    }
    match state.screen {
        Screen::Bookmarks => "No bookmarks yet. Press b on any item to add one.",
        Screen::Components | Screen::Apis => "Nothing in this category.",
    }
}

fn help_text(state: &NavigationState) -> &'static str {
    if state.active_module_example_key.is_some() {
        " b Bookmark  Esc Back  Tab Screen  q Quit "
    } else if state.can_go_back() {
        " ↑↓ Select  Enter Open  b Bookmark  Esc Back  q Quit "
    } else {
        " ↑↓ Select  Enter Open  b Bookmark  Tab/1-3 Screen  q Quit "
    }
}

fn draw_loading_view(frame: &mut Frame, area: Rect, theme: &Theme) {
    let loading = Paragraph::new("Loading catalog...")
        .style(theme.muted)
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, theme: &Theme) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(theme.error)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, reduce};
    use crate::core::catalog::Category;
    use crate::test_support::test_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn render(state: &NavigationState, registry: &Registry, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(70, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, state, registry, tui))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_placeholder() {
        let mut tui = TuiState::new(Theme::dark());
        let text = render(&NavigationState::default(), &Registry::Loading, &mut tui);
        assert!(text.contains("Loading catalog..."));
        assert!(text.contains("Showcase | Components"));
    }

    #[test]
    fn test_error_view() {
        let mut tui = TuiState::new(Theme::dark());
        tui.load_error = Some("catalog parse error: bad".to_string());
        let text = render(&NavigationState::default(), &Registry::Loading, &mut tui);
        assert!(text.contains("ERROR"));
        assert!(text.contains("catalog parse error"));
    }

    #[test]
    fn test_catalog_list_renders() {
        let registry = Registry::ready(test_catalog());
        let state = NavigationState::default();
        let mut tui = TuiState::new(Theme::dark());
        crate::tui::refresh(&mut tui, &state, &registry);
        let text = render(&state, &registry, &mut tui);
        assert!(text.contains("Button"));
        assert!(text.contains("Switch"));
        assert!(!text.contains("Clipboard"));
    }

    #[test]
    fn test_example_view_renders() {
        let registry = Registry::ready(test_catalog());
        let state = Arc::new(NavigationState::default());
        let state = reduce(
            &state,
            &Action::module_card("Button", "Button", Category::Components),
        );
        let state = reduce(&state, &Action::example_card("disabled"));
        let mut tui = TuiState::new(Theme::light());
        let text = render(&state, &registry, &mut tui);
        assert!(text.contains("Showcase | Button › disabled"));
        assert!(text.contains("The disabled example for Button."));
    }

    #[test]
    fn test_help_offers_back_only_inside_a_module() {
        let root = Arc::new(NavigationState::default());
        assert!(!help_text(&root).contains("Esc Back"));

        let open = reduce(
            &root,
            &Action::module_card("Switch", "Switch", Category::Components),
        );
        assert!(help_text(&open).contains("Esc Back"));

        let example = reduce(&open, &Action::example_card("basic usage"));
        assert!(help_text(&example).starts_with(" b Bookmark  Esc Back"));
    }

    #[test]
    fn test_empty_bookmarks_message() {
        let registry = Registry::ready(test_catalog());
        let state = NavigationState {
            screen: Screen::Bookmarks,
            ..Default::default()
        };
        let mut tui = TuiState::new(Theme::dark());
        crate::tui::refresh(&mut tui, &state, &registry);
        let text = render(&state, &registry, &mut tui);
        assert!(text.contains("No bookmarks yet"));
    }
}
