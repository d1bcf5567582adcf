//! # Navigation State
//!
//! The single piece of state owned by the navigation core.
//!
//! ```text
//! NavigationState
//! ├── screen: Screen                          // Components | Apis | Bookmarks
//! ├── active_module_key: Option<String>       // None = catalog list showing
//! ├── active_module_title: Option<String>     // title snapshot for the title bar
//! ├── active_module_example_key: Option<String>  // None = module landing view
//! ├── bookmarks: Bookmarks                    // starred items, set semantics
//! └── recently_used: RecentlyUsed             // most-recent-first, bounded
//! ```
//!
//! State changes only happen through `reduce(state, action)` in action.rs,
//! which always hands back a fresh value instead of editing in place.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Category;

/// How many recently used items are kept unless configured otherwise.
pub const DEFAULT_RECENT_CAPACITY: usize = 10;

/// Top-level catalog view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Components,
    Apis,
    Bookmarks,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Components, Screen::Apis, Screen::Bookmarks];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Components => "Components",
            Screen::Apis => "APIs",
            Screen::Bookmarks => "Bookmarks",
        }
    }

    /// The screen after this one, wrapping around (Tab order).
    pub fn next(self) -> Screen {
        match self {
            Screen::Components => Screen::Apis,
            Screen::Apis => Screen::Bookmarks,
            Screen::Bookmarks => Screen::Components,
        }
    }
}

impl From<Category> for Screen {
    fn from(category: Category) -> Self {
        match category {
            Category::Components => Screen::Components,
            Category::Apis => Screen::Apis,
        }
    }
}

/// Key of a module, or of an example qualified by its module.
///
/// Example names are only unique inside their module, so an example key
/// always carries the module it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKey {
    Module(String),
    Example { module: String, example: String },
}

impl ItemKey {
    pub fn module_key(&self) -> &str {
        match self {
            ItemKey::Module(module) => module,
            ItemKey::Example { module, .. } => module,
        }
    }
}

/// A (category, key) pair identifying something the user can bookmark or
/// has recently opened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemRef {
    pub category: Category,
    pub key: ItemKey,
}

impl ItemRef {
    pub fn module(category: Category, module: impl Into<String>) -> Self {
        Self {
            category,
            key: ItemKey::Module(module.into()),
        }
    }

    pub fn example(
        category: Category,
        module: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            category,
            key: ItemKey::Example {
                module: module.into(),
                example: example.into(),
            },
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            ItemKey::Module(module) => write!(f, "{}/{}", self.category, module),
            ItemKey::Example { module, example } => {
                write!(f, "{}/{}#{}", self.category, module, example)
            }
        }
    }
}

/// Starred items. Membership only, no ordering.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Bookmarks(BTreeSet<ItemRef>);

impl Bookmarks {
    pub fn contains(&self, item: &ItemRef) -> bool {
        self.0.contains(item)
    }

    /// Flip membership of `item`. Returns true if it is now bookmarked.
    pub fn toggle(&mut self, item: ItemRef) -> bool {
        if self.0.remove(&item) {
            false
        } else {
            self.0.insert(item);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.0.iter()
    }
}

/// Most-recent-first list of opened items, bounded by `capacity`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecentlyUsed {
    items: VecDeque<ItemRef>,
    capacity: usize,
}

impl Default for RecentlyUsed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentlyUsed {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Move `item` to the front, dropping any earlier occurrence and
    /// evicting the oldest entries past capacity.
    pub fn record(&mut self, item: ItemRef) {
        if self.items.front() != Some(&item) {
            self.items.retain(|existing| existing != &item);
            self.items.push_front(item);
        }
        self.items.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
    pub active_module_key: Option<String>,
    pub active_module_title: Option<String>,
    pub active_module_example_key: Option<String>,
    pub bookmarks: Bookmarks,
    pub recently_used: RecentlyUsed,
}

impl NavigationState {
    /// Initial state: Components screen, nothing open, nothing starred.
    pub fn new(recent_capacity: usize) -> Self {
        Self {
            recently_used: RecentlyUsed::with_capacity(recent_capacity),
            ..Default::default()
        }
    }

    /// Whether a back press has anything to undo.
    pub fn can_go_back(&self) -> bool {
        self.active_module_key.is_some()
    }

    pub(crate) fn close_module(&mut self) {
        self.active_module_key = None;
        self.active_module_title = None;
        self.active_module_example_key = None;
    }
}
