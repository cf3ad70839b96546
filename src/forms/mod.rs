//! Request payloads and query-string parsing for the HTTP layer.

pub mod criteria;
pub mod menu;
