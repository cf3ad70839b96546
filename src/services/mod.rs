pub mod errors;
pub mod menu;

pub use errors::{ServiceError, ServiceResult};
