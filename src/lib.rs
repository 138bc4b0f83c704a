//! GameStore library
//!
//! Exposes the fetch gateway, data clients, preferences and UI state for use by
//! the binary and integration tests.

pub mod app;
pub mod cli;
pub mod contact;
pub mod data;
pub mod gateway;
pub mod logging;
pub mod prefs;
pub mod ui;
