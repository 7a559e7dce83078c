pub mod config;
pub mod notification;
pub mod pagination;
pub mod selection;
