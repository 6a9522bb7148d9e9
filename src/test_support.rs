//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::Demo;
use crate::core::data::{DataConfig, Dataset};
use crate::core::state::App;

/// Seed used by every test that needs generated data.
pub const TEST_SEED: u64 = 0x70661e5;

/// Seeded dataset with the default counts (20 products, 15 companies).
pub fn test_dataset() -> Dataset {
    Dataset::generate(&DataConfig {
        seed: Some(TEST_SEED),
        ..DataConfig::default()
    })
}

/// Creates a test App showing the render-props demo with hidden company details.
pub fn test_app() -> App {
    App::new(test_dataset(), Demo::RenderProps, false)
}

/// Flattens a buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Flattens a buffer into a single string.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
