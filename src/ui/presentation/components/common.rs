//! Small shared presentation pieces.

use dioxus::prelude::*;

/// Well-known pokéball sprite, used as the UI accent icon.
pub const POKEBALL_ICON: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

/// Loading indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            span { class: "visually-hidden", "Cargando..." }
        }
    }
}
