//! # List Curator
//!
//! Derives the browsable lists from the catalog plus the user's bookmarks
//! and recently used items. Pure and cheap enough to rerun after every
//! dispatch: one pass over modules and examples, no caching.
//!
//! Keys that no longer resolve against the catalog are dropped quietly.

use log::debug;

use crate::core::catalog::{Catalog, Category, Module, Registry, Resolved};
use crate::core::state::{Bookmarks, ItemRef, RecentlyUsed};

/// One row in a derived list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub item: ItemRef,
    pub title: String,
    /// Module title for examples, example count for modules.
    pub subtitle: String,
    pub is_bookmarked: bool,
}

impl CatalogItem {
    fn for_module(module: &Module, bookmarks: &Bookmarks) -> Self {
        let item = ItemRef::module(module.category, module.key.clone());
        let count = module.examples.len();
        Self {
            is_bookmarked: bookmarks.contains(&item),
            item,
            title: module.title.clone(),
            subtitle: format!("{} example{}", count, if count == 1 { "" } else { "s" }),
        }
    }

    fn for_example(module: &Module, name: &str, bookmarks: &Bookmarks) -> Self {
        let item = ItemRef::example(module.category, module.key.clone(), name);
        Self {
            is_bookmarked: bookmarks.contains(&item),
            item,
            title: name.to_string(),
            subtitle: module.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything the catalog screens show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedLists {
    pub components: Section,
    pub apis: Section,
    /// Starred modules and examples, in catalog order.
    pub bookmarks: Section,
    /// "Jump back in" list, most recent first.
    pub recently_used: Section,
}

/// Build all derived lists. `None` means the registry is still loading.
pub fn curate(
    registry: &Registry,
    bookmarks: &Bookmarks,
    recently_used: &RecentlyUsed,
) -> Option<CuratedLists> {
    let catalog = registry.catalog().ok()?;

    let mut components = Section::new(Category::Components.label());
    let mut apis = Section::new(Category::Apis.label());
    let mut starred = Section::new("Bookmarks");

    for module in catalog.modules() {
        let row = CatalogItem::for_module(module, bookmarks);
        if row.is_bookmarked {
            starred.items.push(row.clone());
        }
        match module.category {
            Category::Components => components.items.push(row),
            Category::Apis => apis.items.push(row),
        }
        for example in &module.examples {
            let row = CatalogItem::for_example(module, &example.name, bookmarks);
            if row.is_bookmarked {
                starred.items.push(row);
            }
        }
    }

    if starred.items.len() < bookmarks.len() {
        debug!(
            "{} bookmark(s) no longer resolve and were omitted",
            bookmarks.len() - starred.items.len()
        );
    }

    Some(CuratedLists {
        components,
        apis,
        bookmarks: starred,
        recently_used: recent_section(catalog, bookmarks, recently_used),
    })
}

fn recent_section(catalog: &Catalog, bookmarks: &Bookmarks, recently_used: &RecentlyUsed) -> Section {
    let mut section = Section::new("Jump back in");
    for item in recently_used.iter() {
        match catalog.resolve(item) {
            Ok(Resolved::Module(module)) => {
                section.items.push(CatalogItem::for_module(module, bookmarks));
            }
            Ok(Resolved::Example(module, example)) => {
                section
                    .items
                    .push(CatalogItem::for_example(module, &example.name, bookmarks));
            }
            Err(e) => debug!("Omitting recently used entry: {}", e),
        }
    }
    section
}

/// The landing list of one module: its examples with bookmark flags.
/// `None` if the module is not in the catalog.
pub fn module_examples(catalog: &Catalog, module_key: &str, bookmarks: &Bookmarks) -> Option<Section> {
    let module = catalog.module(module_key)?;
    let mut section = Section::new(module.title.clone());
    section.items = module
        .examples
        .iter()
        .map(|e| CatalogItem::for_example(module, &e.name, bookmarks))
        .collect();
    Some(section)
}
