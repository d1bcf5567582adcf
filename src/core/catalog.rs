//! # Catalog Registry
//!
//! The read-only set of modules and examples the gallery can show.
//!
//! ```text
//! Catalog
//! └── modules: Vec<Module>          // declared order is display order
//!     ├── key / title / category
//!     └── examples: Vec<Example>    // names unique within the module
//! ```
//!
//! The catalog is built once (built-in or from a TOML file) and never
//! mutated afterwards. The shell wraps it in a `Registry` so the curator
//! can tell "still loading" apart from "loaded but empty".

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::error::NavError;
use crate::core::state::{ItemKey, ItemRef};

const BUILTIN_CATALOG: &str = include_str!("builtin_catalog.toml");

/// Top-level grouping of modules. Each category has its own catalog screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Components,
    Apis,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Components => "Components",
            Category::Apis => "APIs",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Apis => "apis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub key: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Module {
    pub fn example(&self, name: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.name == name)
    }
}

/// A catalog entry a key resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Module(&'a Module),
    Example(&'a Module, &'a Example),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    modules: Vec<Module>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate module keys and duplicate
    /// example names within a module.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let catalog = Self { modules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The gallery catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(contents).map_err(CatalogError::Parse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, key: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Looks up the entry behind a bookmark or recently-used key.
    ///
    /// A key whose module is gone, whose example is gone, or whose category
    /// no longer matches the module is reported as `NavError::StaleKey`.
    pub fn resolve(&self, item: &ItemRef) -> Result<Resolved<'_>, NavError> {
        let stale = || NavError::StaleKey(item.clone());
        let module = self
            .module(item.key.module_key())
            .filter(|m| m.category == item.category)
            .ok_or_else(stale)?;
        match &item.key {
            ItemKey::Module(_) => Ok(Resolved::Module(module)),
            ItemKey::Example { example, .. } => module
                .example(example)
                .map(|e| Resolved::Example(module, e))
                .ok_or_else(stale),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut keys = HashSet::new();
        for module in &self.modules {
            if !keys.insert(module.key.as_str()) {
                return Err(CatalogError::DuplicateModule(module.key.clone()));
            }
            let mut names = HashSet::new();
            for example in &module.examples {
                if !names.insert(example.name.as_str()) {
                    return Err(CatalogError::DuplicateExample {
                        module: module.key.clone(),
                        example: example.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog = Catalog::from_toml_str(&contents)?;
    info!(
        "Loaded catalog from {} ({} modules)",
        path.display(),
        catalog.modules.len()
    );
    Ok(catalog)
}

/// Load state of the catalog as seen by the shell and the curator.
#[derive(Debug, Clone, Default)]
pub enum Registry {
    #[default]
    Loading,
    Ready(Arc<Catalog>),
}

impl Registry {
    pub fn ready(catalog: Catalog) -> Self {
        if catalog.is_empty() {
            warn!("Catalog has no modules, every screen will be empty");
        }
        debug!("Registry ready with {} modules", catalog.modules.len());
        Registry::Ready(Arc::new(catalog))
    }

    pub fn catalog(&self) -> Result<&Catalog, NavError> {
        match self {
            Registry::Loading => Err(NavError::NotReady),
            Registry::Ready(catalog) => Ok(catalog),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Registry::Ready(_))
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateModule(String),
    DuplicateExample { module: String, example: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateModule(key) => write!(f, "duplicate module key: {key}"),
            CatalogError::DuplicateExample { module, example } => {
                write!(f, "duplicate example '{example}' in module {module}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
