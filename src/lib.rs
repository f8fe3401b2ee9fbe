//! Pokédex - authenticated catalog browser for the PokeAPI.
//!
//! The crate is layered the same way top to bottom: `domain` wire types,
//! object-safe `ports` to the encyclopedia backend, a reqwest
//! `infrastructure` adapter, `application` services, and a Dioxus `ui` on
//! top.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::Route;

// Re-export the app entrypoint for the binary.
pub use ui::app;
