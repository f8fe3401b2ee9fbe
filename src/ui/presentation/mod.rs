pub mod components;
pub mod format;
pub mod helpers;
pub mod services;
pub mod state;
pub mod translations;
pub mod views;

pub use services::Services;
