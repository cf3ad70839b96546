//! Database models shared across the menu repository.

#[cfg(feature = "server")]
pub mod config;
pub mod menu;
