//! Home view - the searchable, sortable, paginated catalog list.
//!
//! The visible page is re-derived on every render from the cached catalog:
//! pick the source key (full catalog or search), sort, clamp the page, slice.
//! Search and sort changes reset the page to 1 and scroll the view back to
//! the origin. Detail fetches bypass the
//! cache and discard stale results by comparing against the most recently
//! requested name.

use dioxus::prelude::*;

use crate::domain::{CatalogEntry, PokemonDetails};
use crate::ui::presentation::components::{DetailModal, Pagination, Spinner, POKEBALL_ICON};
use crate::ui::presentation::format::format_dex_number;
use crate::ui::presentation::helpers::list_pipeline::{
    clamp_page, page_slice, should_reset_page, sort_entries, total_pages, SortMode,
};
use crate::ui::presentation::services::use_catalog_service;
use crate::ui::presentation::state::{QueryCache, QueryKey, SessionState};
use crate::ui::routes::Route;

fn scroll_to_top() {
    let _ = document::eval("window.scrollTo(0, 0);");
}

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog_service();
    let session = use_context::<SessionState>();
    let cache = use_context::<QueryCache>();
    let nav = use_navigator();

    let mut search = use_signal(String::new);
    let mut sort = use_signal(|| SortMode::ById);
    let mut page = use_signal(|| 1usize);
    let mut selected: Signal<Option<PokemonDetails>> = use_signal(|| None);
    let mut requested: Signal<Option<String>> = use_signal(|| None);
    // Mirrors (search, sort) so the reset effect only fires on real changes.
    let mut last_query = use_signal(|| (String::new(), SortMode::ById));

    // The base catalog is fetched unconditionally, once per session.
    {
        let catalog = catalog.clone();
        use_effect(move || {
            let mut cache = cache;
            cache.ensure(QueryKey::Pokemons, catalog.clone());
        });
    }
    // The search key only fetches while a term is present.
    {
        let catalog = catalog.clone();
        use_effect(move || {
            let term = search.read().clone();
            if !term.is_empty() {
                let mut cache = cache;
                cache.ensure(QueryKey::Search(term), catalog.clone());
            }
        });
    }
    // A changed search term or sort mode snaps back to the first page and
    // scrolls the view to origin.
    use_effect(move || {
        let term = search.read().clone();
        let mode = sort();
        let (prev_term, prev_mode) = last_query.peek().clone();
        if should_reset_page(&prev_term, &term, prev_mode, mode) {
            last_query.set((term, mode));
            page.set(1);
            scroll_to_top();
        }
    });

    let term = search.read().clone();
    let base = cache.entry(&QueryKey::Pokemons);
    // First catalog load blanks the whole page.
    if base.is_loading {
        return rsx! {
            div { class: "full-page-center", Spinner {} }
        };
    }

    let (source, searching) = if term.is_empty() {
        (base, false)
    } else {
        let entry = cache.entry(&QueryKey::Search(term.clone()));
        let loading = entry.is_loading;
        (entry, loading)
    };

    // A failed source reads as an empty visible set; the error itself was
    // already logged by the cache.
    let entries: &[CatalogEntry] = source.data.as_deref().map(|v| v.as_slice()).unwrap_or(&[]);
    let sorted = sort_entries(entries, sort());
    let pages = total_pages(sorted.len());
    let current = clamp_page(page(), pages);
    let visible = page_slice(&sorted, current).to_vec();

    let user_email = session
        .user()
        .read()
        .as_ref()
        .map(|principal| principal.email.clone())
        .unwrap_or_default();

    let on_logout = {
        let mut session = session.clone();
        move |_| {
            // Principal first, cache second: an in-flight authenticated
            // request must not outlive the session in a fresh cache.
            session.set_user(None);
            let mut cache = cache;
            cache.clear();
            nav.push(Route::Login {});
        }
    };

    let on_select = {
        let catalog = catalog.clone();
        move |entry: CatalogEntry| {
            let catalog = catalog.clone();
            let name = entry.name.clone();
            requested.set(Some(name.clone()));
            spawn(async move {
                match catalog.detail(&name).await {
                    // Only the most recently requested creature may land in
                    // the modal; late arrivals for older clicks are dropped.
                    Ok(details) => {
                        if requested.peek().as_deref() == Some(name.as_str()) {
                            selected.set(Some(details));
                        }
                    }
                    Err(error) => {
                        tracing::error!(%error, %name, "failed to load creature details");
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "home-page",
            nav {
                class: "navbar",
                div {
                    class: "navbar-brand",
                    img { class: "brand-icon", src: POKEBALL_ICON, alt: "Pokeball" }
                    span { "Pokédex" }
                }
                div {
                    class: "navbar-session",
                    span { class: "session-email", title: "{user_email}", "{user_email}" }
                    button {
                        class: "btn btn-primary",
                        onclick: on_logout,
                        "Cerrar Sesión"
                    }
                }
            }

            main {
                class: "content",
                div {
                    class: "card",
                    div {
                        class: "card-header",
                        div {
                            class: "toolbar",
                            input {
                                r#type: "text",
                                class: "form-control search-input",
                                placeholder: "Buscar Pokémon...",
                                value: "{search}",
                                oninput: move |e| search.set(e.value()),
                            }
                            div {
                                class: "btn-group",
                                button {
                                    class: if sort() == SortMode::ByName { "btn btn-primary" } else { "btn btn-outline" },
                                    onclick: move |_| sort.set(SortMode::ByName),
                                    "Nombre"
                                }
                                button {
                                    class: if sort() == SortMode::ById { "btn btn-primary" } else { "btn btn-outline" },
                                    onclick: move |_| sort.set(SortMode::ById),
                                    "Número"
                                }
                            }
                        }
                    }
                    div {
                        class: "card-body",
                        if searching {
                            div { class: "inline-center", Spinner {} }
                        } else {
                            div {
                                class: "entry-list",
                                for entry in visible {
                                    button {
                                        key: "{entry.name}",
                                        class: "entry-row",
                                        onclick: {
                                            let mut on_select = on_select.clone();
                                            let entry = entry.clone();
                                            move |_| on_select(entry.clone())
                                        },
                                        div {
                                            class: "entry-name",
                                            img { class: "row-icon", src: POKEBALL_ICON, alt: "Pokeball" }
                                            span { class: "capitalize", "{entry.name}" }
                                        }
                                        span { class: "text-muted", "{format_dex_number(entry.id())}" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "card-footer",
                        Pagination {
                            current,
                            total: pages,
                            on_change: move |p: usize| {
                                page.set(p);
                                scroll_to_top();
                            },
                        }
                    }
                }
            }

            if let Some(pokemon) = selected.read().clone() {
                DetailModal {
                    pokemon,
                    on_close: move |_| {
                        selected.set(None);
                        requested.set(None);
                    },
                }
            }
        }
    }
}
