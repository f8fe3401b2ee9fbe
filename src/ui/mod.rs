use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use crate::infrastructure::TokenStore;
use self::presentation::state::{QueryCache, SessionState};

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `src/main.rs`).
    let tokens = use_context::<TokenStore>();

    // Session principal and query cache live for the page lifetime; both must
    // be created inside the active Dioxus runtime.
    use_context_provider(|| SessionState::new(tokens));
    use_context_provider(QueryCache::new);

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }

        Router::<Route> {}
    }
}
