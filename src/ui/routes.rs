//! Route table and the public/private partition.
//!
//! `/auth/*` is public and funnels into the login view; everything else is
//! private behind [`RequireAuth`], which bounces unauthenticated visitors to
//! `/auth/login`. Unknown private paths land on `/`.

use dioxus::prelude::*;

use crate::ui::presentation::state::SessionState;
use crate::ui::presentation::views::{Home, Login};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Spelled with the nest prefix inlined: the Routable derive generates
    // non-compiling code for a catch-all redirect inside `#[nest]`.
    #[redirect("/auth/:..segments", |segments: Vec<String>| Route::Login {})]
    #[nest("/auth")]
        #[route("/login")]
        Login {},
    #[end_nest]
    #[layout(RequireAuth)]
        #[redirect("/:..segments", |segments: Vec<String>| Route::Home {})]
        #[route("/")]
        Home {},
}

/// Layout gating the private partition on a present session principal.
#[component]
fn RequireAuth() -> Element {
    let session = use_context::<SessionState>();
    let nav = use_navigator();

    let logged_in = session.user().read().is_some();

    let session_for_effect = session.clone();
    use_effect(move || {
        if session_for_effect.user().read().is_none() {
            nav.replace(Route::Login {});
        }
    });

    if !logged_in {
        // Blank frame while the redirect above lands.
        return rsx! {};
    }
    rsx! {
        Outlet::<Route> {}
    }
}
