//! # Actions
//!
//! Every user gesture in the gallery becomes an `Action`.
//! User opens a module card? That's `Action::ModuleCardPress { .. }`.
//! User hits back? That's `Action::BackButtonPress`.
//!
//! `reduce()` takes the current state and an action and returns the next
//! state. No side effects here. Rendering and key handling happen elsewhere.
//!
//! ```text
//! State + Action  →  reduce()  →  New State
//! ```
//!
//! Transitions with nothing to do hand back the *same* `Arc`, so callers can
//! tell a consumed gesture from an ignored one with `Arc::ptr_eq`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Category;
use crate::core::error::NavError;
use crate::core::state::{ItemRef, NavigationState, Screen};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Action {
    /// Pop one level: example → module landing → catalog list.
    BackButtonPress,
    /// Open a module's landing view and record it as recently used.
    ModuleCardPress {
        module_key: String,
        title: String,
        category: Category,
    },
    /// Drill into an example of the open module.
    ExampleCardPress { example_key: String },
    /// Star or unstar a module or example.
    BookmarkToggle { item: ItemRef },
    /// Switch top-level screens. Always exits any open module.
    NavBarPress { screen: Screen },
}

impl Action {
    /// Parse one JSON-encoded action.
    ///
    /// Unknown kinds and missing fields are caller defects and come back as
    /// `NavError::InvalidAction`.
    pub fn parse(json: &str) -> Result<Self, NavError> {
        serde_json::from_str(json).map_err(|e| NavError::InvalidAction(e.to_string()))
    }

    pub fn module_card(
        module_key: impl Into<String>,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Action::ModuleCardPress {
            module_key: module_key.into(),
            title: title.into(),
            category,
        }
    }

    pub fn example_card(example_key: impl Into<String>) -> Self {
        Action::ExampleCardPress {
            example_key: example_key.into(),
        }
    }
}

/// Compute the state that follows `state` once `action` has happened.
pub fn reduce(state: &Arc<NavigationState>, action: &Action) -> Arc<NavigationState> {
    match action {
        Action::BackButtonPress => {
            if state.active_module_example_key.is_some() {
                let mut next = NavigationState::clone(state);
                next.active_module_example_key = None;
                Arc::new(next)
            } else if state.active_module_key.is_some() {
                let mut next = NavigationState::clone(state);
                next.close_module();
                Arc::new(next)
            } else {
                Arc::clone(state)
            }
        }
        Action::ModuleCardPress {
            module_key,
            title,
            category,
        } => {
            let mut next = NavigationState::clone(state);
            next.active_module_key = Some(module_key.clone());
            next.active_module_title = Some(title.clone());
            next.active_module_example_key = None;
            next.recently_used
                .record(ItemRef::module(*category, module_key.clone()));
            Arc::new(next)
        }
        Action::ExampleCardPress { example_key } => {
            if state.active_module_key.is_none() {
                return Arc::clone(state);
            }
            let mut next = NavigationState::clone(state);
            next.active_module_example_key = Some(example_key.clone());
            Arc::new(next)
        }
        Action::BookmarkToggle { item } => {
            let mut next = NavigationState::clone(state);
            next.bookmarks.toggle(item.clone());
            Arc::new(next)
        }
        Action::NavBarPress { screen } => {
            // Pressing the active screen again still resets to its root.
            let mut next = NavigationState::clone(state);
            next.screen = *screen;
            next.close_module();
            Arc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Arc<NavigationState> {
        Arc::new(NavigationState::new(3))
    }

    fn button() -> Action {
        Action::module_card("Button", "Button", Category::Components)
    }

    #[test]
    fn test_back_at_root_returns_same_instance() {
        let state = initial();
        let next = reduce(&state, &Action::BackButtonPress);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_module_card_press_opens_module() {
        let next = reduce(&initial(), &button());
        assert_eq!(next.active_module_key.as_deref(), Some("Button"));
        assert_eq!(next.active_module_title.as_deref(), Some("Button"));
        assert!(next.active_module_example_key.is_none());
        let recent: Vec<&ItemRef> = next.recently_used.iter().collect();
        assert_eq!(recent, vec![&ItemRef::module(Category::Components, "Button")]);
    }

    #[test]
    fn test_module_card_press_clears_example() {
        let state = reduce(&initial(), &button());
        let state = reduce(&state, &Action::example_card("disabled"));
        let state = reduce(
            &state,
            &Action::module_card("Image", "Image", Category::Components),
        );
        assert_eq!(state.active_module_key.as_deref(), Some("Image"));
        assert!(state.active_module_example_key.is_none());
    }

    #[test]
    fn test_back_pops_one_level_at_a_time() {
        let state = reduce(&initial(), &button());
        let state = reduce(&state, &Action::example_card("basic usage"));

        let state = reduce(&state, &Action::BackButtonPress);
        assert!(state.active_module_example_key.is_none());
        assert_eq!(state.active_module_key.as_deref(), Some("Button"));

        let state = reduce(&state, &Action::BackButtonPress);
        assert!(state.active_module_key.is_none());
        assert!(state.active_module_title.is_none());
        // Recency is not undone by going back
        assert_eq!(state.recently_used.len(), 1);
    }

    #[test]
    fn test_example_press_without_module_is_noop() {
        let state = initial();
        let next = reduce(&state, &Action::example_card("basic usage"));
        assert!(Arc::ptr_eq(&state, &next));
        assert!(next.active_module_example_key.is_none());
    }

    #[test]
    fn test_bookmark_toggle_twice_restores_state() {
        let state = reduce(&initial(), &button());
        let toggle = Action::BookmarkToggle {
            item: ItemRef::module(Category::Components, "Button"),
        };
        let once = reduce(&state, &toggle);
        assert_eq!(once.bookmarks.len(), 1);
        let twice = reduce(&once, &toggle);
        assert_eq!(*twice, *state);
    }

    #[test]
    fn test_nav_bar_to_other_screen_closes_module() {
        let state = reduce(&initial(), &button());
        let state = reduce(&state, &Action::example_card("basic usage"));
        let next = reduce(&state, &Action::NavBarPress { screen: Screen::Apis });
        assert_eq!(next.screen, Screen::Apis);
        assert!(next.active_module_key.is_none());
        assert!(next.active_module_title.is_none());
        assert!(next.active_module_example_key.is_none());
    }

    #[test]
    fn test_nav_bar_same_screen_resets_to_root() {
        let state = reduce(&initial(), &button());
        let next = reduce(
            &state,
            &Action::NavBarPress {
                screen: Screen::Components,
            },
        );
        assert_eq!(next.screen, Screen::Components);
        assert!(next.active_module_key.is_none());
    }

    #[test]
    fn test_repress_most_recent_module_keeps_order() {
        let state = reduce(&initial(), &button());
        let state = reduce(&state, &button());
        assert_eq!(state.recently_used.len(), 1);
    }

    #[test]
    fn test_parse_tagged_actions() {
        let action = Action::parse(
            r#"{"kind":"ModuleCardPress","module_key":"Button","title":"Button","category":"components"}"#,
        )
        .unwrap();
        assert_eq!(action, button());

        let action = Action::parse(r#"{"kind":"BackButtonPress"}"#).unwrap();
        assert_eq!(action, Action::BackButtonPress);

        let action = Action::parse(
            r#"{"kind":"BookmarkToggle","item":{"category":"apis","key":{"example":{"module":"Alert","example":"simple alert"}}}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::BookmarkToggle {
                item: ItemRef::example(Category::Apis, "Alert", "simple alert")
            }
        );
    }

    #[test]
    fn test_parse_unknown_kind_is_invalid_action() {
        let err = Action::parse(r#"{"kind":"ShakeGesture"}"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidAction(_)));
    }

    #[test]
    fn test_parse_missing_field_is_invalid_action() {
        let err = Action::parse(r#"{"kind":"ExampleCardPress"}"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidAction(_)));
    }
}
