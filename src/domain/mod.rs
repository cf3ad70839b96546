//! Domain types for the menu service.

pub mod criteria;
pub mod filter;
pub mod menu;
pub mod types;
