//! Toggles library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which composition pattern the UI demonstrates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    /// "Products" and "Companies" lists built by injecting an item renderer.
    #[default]
    RenderProps,
    /// A bare product list next to the same list wrapped with toggles.
    Hoc,
}

impl Demo {
    pub fn next(self) -> Self {
        match self {
            Demo::RenderProps => Demo::Hoc,
            Demo::Hoc => Demo::RenderProps,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Demo::RenderProps => "render props",
            Demo::Hoc => "higher-order component",
        }
    }
}
