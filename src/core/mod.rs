//! # Core Application Logic
//!
//! This module contains the gallery's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (registry)   │
//!                    │  • State + Action       │
//!                    │  • reduce() (reducer)   │
//!                    │  • curate() (lists)     │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   replay   │
//!            │  (ratatui) │            │  (JSONL)   │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: modules, examples and the `Registry` load state
//! - [`state`]: `NavigationState` and its key/collection types
//! - [`action`]: the `Action` enum and `reduce()`
//! - [`store`]: the single state cell, replaced on each dispatch
//! - [`curator`]: derived lists for the catalog screens
//! - [`config`]: settings file and override resolution
//! - [`replay`]: fold a recorded action log through the reducer

pub mod action;
pub mod catalog;
pub mod config;
pub mod curator;
pub mod error;
pub mod replay;
pub mod state;
pub mod store;

pub use action::{Action, reduce};
pub use catalog::{Catalog, Category, Registry};
pub use curator::{CuratedLists, curate};
pub use error::NavError;
pub use state::{ItemKey, ItemRef, NavigationState, Screen};
pub use store::{Outcome, Store};
