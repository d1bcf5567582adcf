//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: where the user is (module / example)
//! - `NavBar`: top-level screen tabs
//! - `ExampleView`: detail page of one example
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ItemList`: sectioned, selectable catalog list
//!
//! Components receive everything as props, including the `Theme`, rather
//! than reaching into shared state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(heading, example, &tui.theme).render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── nav_bar.rs
//! ├── item_list.rs
//! └── example_view.rs
//! ```

pub mod example_view;
pub mod item_list;
pub mod nav_bar;
pub mod title_bar;

pub use example_view::ExampleView;
pub use item_list::{ItemList, ItemListState, ListEvent};
pub use nav_bar::NavBar;
pub use title_bar::TitleBar;
