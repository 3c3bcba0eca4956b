//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::friend::seed_friends;
use crate::core::state::App;

/// Creates a test App holding the seed friends (Clark -7, Sarah 20, Anthony 0).
pub fn test_app() -> App {
    App::new(seed_friends(), "$".to_string())
}

/// Flattens a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
