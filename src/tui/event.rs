use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::state::Screen;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    Back,      // Esc / Backspace / Left
    Submit,    // Enter / Right
    CursorUp,
    CursorDown,
    NextScreen, // Tab
    SelectScreen(Screen),
    ToggleBookmark,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('b')) => Some(TuiEvent::ToggleBookmark),
        (_, KeyCode::Char('1')) => Some(TuiEvent::SelectScreen(Screen::Components)),
        (_, KeyCode::Char('2')) => Some(TuiEvent::SelectScreen(Screen::Apis)),
        (_, KeyCode::Char('3')) => Some(TuiEvent::SelectScreen(Screen::Bookmarks)),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) | (_, KeyCode::Right) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) | (_, KeyCode::Left) => Some(TuiEvent::Back),
        (_, KeyCode::Tab) => Some(TuiEvent::NextScreen),
        _ => None,
    }
}
