//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! key → TuiEvent → Action → Store::dispatch → curate() → ItemListState → draw
//! ```
//!
//! The catalog is loaded on a background thread and handed over through an
//! mpsc channel. Until it arrives the registry is `Loading` and the main
//! area shows a placeholder.
//!
//! A back press the store reports as `Unchanged` (nothing open) falls
//! through to the default behaviour of leaving the application.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::catalog::{Catalog, CatalogError, Registry, load_catalog};
use crate::core::config::ResolvedConfig;
use crate::core::curator::{CatalogItem, Section, curate, module_examples};
use crate::core::state::{ItemKey, ItemRef, NavigationState, Screen};
use crate::core::store::{Outcome, Store};
use crate::tui::component::EventHandler;
use crate::tui::components::{ItemListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use theme::Theme;

/// Where the user is. A change resets the list selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Location {
    screen: Screen,
    module: Option<String>,
    example: Option<String>,
}

impl Location {
    fn of(state: &NavigationState) -> Self {
        Self {
            screen: state.screen,
            module: state.active_module_key.clone(),
            example: state.active_module_example_key.clone(),
        }
    }
}

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub list: ItemListState,
    pub theme: Theme,
    /// Set when the catalog failed to load; shown instead of the lists.
    pub load_error: Option<String>,
    location: Location,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            list: ItemListState::default(),
            theme,
            load_error: None,
            location: Location::default(),
        }
    }
}

/// Whether the loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Sections shown for the current state, or nothing while the registry loads
/// and while a single example is open.
fn visible_sections(state: &NavigationState, registry: &Registry) -> Vec<Section> {
    let Some(lists) = curate(registry, &state.bookmarks, &state.recently_used) else {
        return Vec::new();
    };
    if state.active_module_example_key.is_some() {
        return Vec::new();
    }
    if let Some(module_key) = &state.active_module_key {
        return registry
            .catalog()
            .ok()
            .and_then(|catalog| module_examples(catalog, module_key, &state.bookmarks))
            .into_iter()
            .collect();
    }
    match state.screen {
        Screen::Components => vec![lists.recently_used, lists.components],
        Screen::Apis => vec![lists.recently_used, lists.apis],
        Screen::Bookmarks => vec![lists.bookmarks],
    }
}

/// Recompute the list after a state change.
fn refresh(tui: &mut TuiState, state: &NavigationState, registry: &Registry) {
    let location = Location::of(state);
    let moved = location != tui.location;
    tui.location = location;
    tui.list.sync(visible_sections(state, registry), moved);
}

/// Key of the example currently open, qualified with its module's category.
fn active_example_ref(state: &NavigationState, registry: &Registry) -> Option<ItemRef> {
    let module_key = state.active_module_key.as_deref()?;
    let example = state.active_module_example_key.as_deref()?;
    let module = registry.catalog().ok()?.module(module_key)?;
    Some(ItemRef::example(module.category, module_key, example))
}

fn open_item(store: &mut Store, registry: &Registry, row: &CatalogItem) {
    match &row.item.key {
        ItemKey::Module(module_key) => {
            store.dispatch(Action::module_card(
                module_key.clone(),
                row.title.clone(),
                row.item.category,
            ));
        }
        ItemKey::Example { module, example } => {
            if store.state().active_module_key.as_deref() != Some(module.as_str()) {
                let title = registry
                    .catalog()
                    .ok()
                    .and_then(|c| c.module(module))
                    .map(|m| m.title.clone())
                    .unwrap_or_else(|| module.clone());
                store.dispatch(Action::module_card(module.clone(), title, row.item.category));
            }
            store.dispatch(Action::example_card(example.clone()));
        }
    }
}

fn handle_event(
    store: &mut Store,
    registry: &Registry,
    tui: &mut TuiState,
    event: TuiEvent,
) -> Control {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Control::Quit,
        TuiEvent::Resize => return Control::Continue,
        TuiEvent::Back => {
            if store.dispatch(Action::BackButtonPress) == Outcome::Unchanged {
                info!("Back pressed with nothing open, exiting");
                return Control::Quit;
            }
        }
        TuiEvent::NextScreen => {
            let screen = store.state().screen.next();
            store.dispatch(Action::NavBarPress { screen });
        }
        TuiEvent::SelectScreen(screen) => {
            store.dispatch(Action::NavBarPress { screen });
        }
        TuiEvent::ToggleBookmark if store.state().active_module_example_key.is_some() => {
            match active_example_ref(store.state(), registry) {
                Some(item) => {
                    store.dispatch(Action::BookmarkToggle { item });
                }
                None => debug!("Open example is not in the catalog, nothing to bookmark"),
            }
        }
        _ if store.state().active_module_example_key.is_some() => {}
        other => match tui.list.handle_event(&other) {
            Some(ListEvent::Open(row)) => open_item(store, registry, &row),
            Some(ListEvent::ToggleBookmark(row)) => {
                store.dispatch(Action::BookmarkToggle { item: row.item });
            }
            None => {}
        },
    }
    refresh(tui, store.state(), registry);
    Control::Continue
}

fn spawn_catalog_load(path: Option<PathBuf>, tx: mpsc::Sender<Result<Catalog, CatalogError>>) {
    thread::spawn(move || {
        let result = match &path {
            Some(path) => load_catalog(path),
            None => Catalog::builtin(),
        };
        if tx.send(result).is_err() {
            warn!("Catalog loaded after the UI shut down");
        }
    });
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store = Store::new(NavigationState::new(config.recent_capacity));
    let mut registry = Registry::Loading;
    let mut tui = TuiState::new(Theme::from(config.theme));

    let (tx, rx) = mpsc::channel();
    spawn_catalog_load(config.catalog_file.clone(), tx);

    let mut terminal = ratatui::init();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        match rx.try_recv() {
            Ok(Ok(catalog)) => {
                registry = Registry::ready(catalog);
                refresh(&mut tui, store.state(), &registry);
                needs_redraw = true;
            }
            Ok(Err(e)) => {
                warn!("Failed to load catalog: {}", e);
                tui.load_error = Some(e.to_string());
                needs_redraw = true;
            }
            Err(_) => {}
        }

        if needs_redraw {
            if let Err(e) =
                terminal.draw(|f| ui::draw_ui(f, store.state(), &registry, &mut tui))
            {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Poll quickly until the catalog arrives, then idle
        let timeout = if registry.is_ready() || tui.load_error.is_some() {
            Duration::from_millis(500)
        } else {
            Duration::from_millis(50)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut store, &registry, &mut tui, event) == Control::Quit {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!(
        "Exiting with {} bookmark(s), {} recent item(s)",
        store.state().bookmarks.len(),
        store.state().recently_used.len()
    );
    result
}
