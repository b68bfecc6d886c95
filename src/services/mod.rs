pub mod categories;
pub mod errors;
pub mod items;
pub mod uploads;

pub use errors::{ServiceError, ServiceResult};
