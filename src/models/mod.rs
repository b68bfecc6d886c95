pub mod association;
pub mod category;
pub mod config;
pub mod item;
