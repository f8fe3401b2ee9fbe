//! Application layer - services the UI talks to.

pub mod services;
