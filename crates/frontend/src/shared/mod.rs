pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod icons;
pub mod modal;
pub mod notifications;
