//! Preference storage for the cart counter and theme choice
//!
//! Preferences are a small JSON file in the per-user config directory. Missing
//! or unreadable files fall back to defaults so a fresh install starts with an
//! empty cart and the dark theme.

mod store;

pub use store::{PreferenceStore, Preferences, Theme};
