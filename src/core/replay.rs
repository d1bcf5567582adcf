//! # Replay
//!
//! Folds a recorded session (JSON Lines, one action per line) through the
//! reducer. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"kind":"ModuleCardPress","module_key":"Button","title":"Button","category":"components"}
//! {"kind":"ExampleCardPress","example_key":"basic usage"}
//! {"kind":"BackButtonPress"}
//! ```

use std::fmt;
use std::io::BufRead;

use log::{debug, info};

use crate::core::action::Action;
use crate::core::error::NavError;
use crate::core::state::NavigationState;
use crate::core::store::{Outcome, Store};

#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    Action { line: usize, error: NavError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "replay I/O error: {e}"),
            ReplayError::Action { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Apply every action in `input` to `initial`, returning the final state.
/// Stops at the first line that is not a valid action.
pub fn replay(input: impl BufRead, initial: NavigationState) -> Result<NavigationState, ReplayError> {
    let mut store = Store::new(initial);
    let mut applied = 0usize;
    let mut ignored = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(ReplayError::Io)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = Action::parse(trimmed).map_err(|error| ReplayError::Action {
            line: index + 1,
            error,
        })?;
        match store.dispatch(action) {
            Outcome::Changed => applied += 1,
            Outcome::Unchanged => {
                debug!("Line {}: action had no effect", index + 1);
                ignored += 1;
            }
        }
    }

    info!("Replay finished: {} applied, {} without effect", applied, ignored);
    Ok(store.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Screen;

    #[test]
    fn test_replay_folds_actions_in_order() {
        let input = r#"
# open Button, drill in, come back out one level
{"kind":"ModuleCardPress","module_key":"Button","title":"Button","category":"components"}
{"kind":"ExampleCardPress","example_key":"basic usage"}
{"kind":"BackButtonPress"}
{"kind":"BookmarkToggle","item":{"category":"components","key":{"module":"Button"}}}
"#;
        let state = replay(input.as_bytes(), NavigationState::new(5)).unwrap();
        assert_eq!(state.active_module_key.as_deref(), Some("Button"));
        assert!(state.active_module_example_key.is_none());
        assert_eq!(state.bookmarks.len(), 1);
        assert_eq!(state.recently_used.len(), 1);
    }

    #[test]
    fn test_replay_reports_line_of_invalid_action() {
        let input = "{\"kind\":\"NavBarPress\",\"screen\":\"apis\"}\n\n{\"kind\":\"Teleport\"}\n";
        let err = replay(input.as_bytes(), NavigationState::default()).unwrap_err();
        match err {
            ReplayError::Action { line, error } => {
                assert_eq!(line, 3);
                assert!(matches!(error, NavError::InvalidAction(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_replay_of_nothing_is_initial_state() {
        let state = replay("".as_bytes(), NavigationState::default()).unwrap();
        assert_eq!(state, NavigationState::default());
        assert_eq!(state.screen, Screen::Components);
    }
}
