//! # Application State
//!
//! Core state for the demo. Presentation state (list toggles, hover,
//! scroll offsets) lives in the `tui` module, next to the components
//! that own it.
//!
//! ```text
//! App
//! ├── products: Vec<Product>      // generated once, read-only
//! ├── companies: Vec<Company>     // generated once, read-only
//! ├── demo: Demo                  // which pattern is on screen
//! ├── default_visibility: bool    // initial company "About" state
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::Demo;
use crate::core::config::ResolvedConfig;
use crate::core::data::{Company, Dataset, Product};

pub struct App {
    pub products: Vec<Product>,
    pub companies: Vec<Company>,
    pub demo: Demo,
    pub default_visibility: bool,
    pub status_message: String,
}

impl App {
    pub fn new(dataset: Dataset, demo: Demo, default_visibility: bool) -> Self {
        Self {
            products: dataset.products,
            companies: dataset.companies,
            demo,
            default_visibility,
            status_message: String::from("Welcome!"),
        }
    }

    /// Generates the dataset described by `config` and builds the app around it.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            Dataset::generate(&config.data),
            config.demo,
            config.default_visibility,
        )
    }
}
