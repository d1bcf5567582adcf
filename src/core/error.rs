use std::fmt;

use crate::core::state::ItemRef;

/// Errors raised by the navigation core.
///
/// `InvalidAction` and `NotReady` point at a caller defect and should be
/// surfaced loudly. `StaleKey` is data staleness and is always recovered
/// where it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// An action payload could not be understood (unknown kind, missing field).
    InvalidAction(String),
    /// A bookmark or recently-used key no longer resolves to a catalog entry.
    StaleKey(ItemRef),
    /// The catalog registry has not finished loading.
    NotReady,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidAction(msg) => write!(f, "invalid action: {msg}"),
            NavError::StaleKey(item) => write!(f, "stale catalog key: {item}"),
            NavError::NotReady => write!(f, "catalog registry is not ready"),
        }
    }
}

impl std::error::Error for NavError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;

    #[test]
    fn test_display_messages() {
        let err = NavError::InvalidAction("unknown variant `Fly`".to_string());
        assert_eq!(err.to_string(), "invalid action: unknown variant `Fly`");

        let stale = NavError::StaleKey(ItemRef::module(Category::Components, "Gone"));
        assert_eq!(stale.to_string(), "stale catalog key: components/Gone");

        assert_eq!(NavError::NotReady.to_string(), "catalog registry is not ready");
    }
}
