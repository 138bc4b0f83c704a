//! UI rendering module for GameStore
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod contact;
pub mod help_overlay;
pub mod palette;
pub mod search;
pub mod storefront;

pub use contact::render as render_contact;
pub use help_overlay::render as render_help_overlay;
pub use palette::Palette;
pub use search::render as render_search;
pub use storefront::render as render_storefront;
