//! Detail modal - attributes, sprite selector, type badges, abilities, and
//! stat bars for one creature.
//!
//! The sprite selector is a two-axis toggle (normal/shiny x front/back)
//! mapped deterministically to the four sprite URL slots. A broken or missing
//! image renders a placeholder tile; any explicit toggle clears the error so
//! the new URL gets a fresh load attempt.

use dioxus::prelude::*;

use crate::domain::{PokemonDetails, SpriteFace, SpriteVariant};
use crate::ui::presentation::components::POKEBALL_ICON;
use crate::ui::presentation::format::{
    format_base_experience, format_dex_number, format_height, format_weight, stat_bar_color,
    stat_bar_width, title_case,
};
use crate::ui::presentation::translations::{format_stat_name, translate_ability, type_color};

#[derive(Props, Clone, PartialEq)]
pub struct DetailModalProps {
    pub pokemon: PokemonDetails,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn DetailModal(props: DetailModalProps) -> Element {
    let mut variant = use_signal(|| SpriteVariant::Normal);
    let mut face = use_signal(|| SpriteFace::Front);
    let mut image_error = use_signal(|| false);

    // The component instance survives when the selection jumps straight from
    // one creature to another, so the toggles reset on an id change rather
    // than on mount.
    let mut shown_id = use_signal(|| props.pokemon.id);
    if *shown_id.peek() != props.pokemon.id {
        shown_id.set(props.pokemon.id);
        variant.set(SpriteVariant::Normal);
        face.set(SpriteFace::Front);
        image_error.set(false);
    }

    let pokemon = &props.pokemon;
    let name = title_case(&pokemon.name);
    // A null slot and a failed load both collapse into the placeholder tile.
    let sprite = if image_error() {
        None
    } else {
        pokemon.sprites.url(variant(), face()).map(str::to_string)
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "modal-dialog",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h5 {
                        class: "modal-title",
                        img { class: "brand-icon", src: POKEBALL_ICON, alt: "Pokeball" }
                        "{name} {format_dex_number(pokemon.id)}"
                    }
                    button {
                        class: "btn-close",
                        aria_label: "Close",
                        onclick: move |_| props.on_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "modal-body",
                    div {
                        class: "modal-columns",

                        // Sprite column
                        div {
                            class: "sprite-column",
                            if let Some(url) = sprite {
                                img {
                                    class: "sprite-image",
                                    src: "{url}",
                                    alt: "{pokemon.name}",
                                    onerror: move |_| image_error.set(true),
                                }
                            } else {
                                div {
                                    class: "sprite-placeholder",
                                    span { class: "sprite-placeholder-icon", "🖼" }
                                    small { "Imagen no disponible" }
                                }
                            }
                            div {
                                class: "btn-group",
                                button {
                                    class: if variant() == SpriteVariant::Normal { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                                    onclick: move |_| {
                                        variant.set(SpriteVariant::Normal);
                                        image_error.set(false);
                                    },
                                    "Normal"
                                }
                                button {
                                    class: if variant() == SpriteVariant::Shiny { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                                    onclick: move |_| {
                                        variant.set(SpriteVariant::Shiny);
                                        image_error.set(false);
                                    },
                                    "Shiny"
                                }
                            }
                            button {
                                class: "btn btn-sm btn-outline btn-block",
                                onclick: move |_| {
                                    let flipped = match face() {
                                        SpriteFace::Front => SpriteFace::Back,
                                        SpriteFace::Back => SpriteFace::Front,
                                    };
                                    face.set(flipped);
                                    image_error.set(false);
                                },
                                if face() == SpriteFace::Front { "Ver dorso" } else { "Ver frente" }
                            }
                            div {
                                class: "type-badges",
                                if pokemon.types.is_empty() {
                                    span { class: "badge badge-muted", "Sin tipo definido" }
                                } else {
                                    for slot in pokemon.types.iter() {
                                        span {
                                            class: "badge type-badge",
                                            style: "background-color: {type_color(&slot.kind.name)};",
                                            "{slot.kind.name}"
                                        }
                                    }
                                }
                            }
                        }

                        // Attributes, abilities, stats
                        div {
                            class: "detail-column",
                            div {
                                class: "attribute-triptych",
                                div {
                                    class: "attribute",
                                    span { class: "attribute-icon", "📏" }
                                    h6 { "Altura" }
                                    p { "{format_height(pokemon.height)}" }
                                }
                                div {
                                    class: "attribute",
                                    span { class: "attribute-icon", "⚖" }
                                    h6 { "Peso" }
                                    p { "{format_weight(pokemon.weight)}" }
                                }
                                div {
                                    class: "attribute",
                                    span { class: "attribute-icon", "⚡" }
                                    h6 { "Exp. Base" }
                                    p { "{format_base_experience(pokemon.base_experience)}" }
                                }
                            }

                            div {
                                class: "abilities-section",
                                h6 { "Habilidades" }
                                div {
                                    class: "ability-badges",
                                    if pokemon.abilities.is_empty() {
                                        span { class: "badge badge-muted", "Sin habilidades conocidas" }
                                    } else {
                                        for slot in pokemon.abilities.iter() {
                                            span {
                                                class: if slot.is_hidden { "badge badge-hidden" } else { "badge badge-ability" },
                                                title: if slot.is_hidden { "Habilidad Oculta" } else { "Habilidad Normal" },
                                                "{translate_ability(&slot.ability.name)}"
                                            }
                                        }
                                    }
                                }
                            }

                            div {
                                class: "stats-section",
                                h6 { "Estadísticas base" }
                                if pokemon.stats.is_empty() {
                                    p { class: "text-muted", "Sin estadísticas disponibles" }
                                } else {
                                    for slot in pokemon.stats.iter() {
                                        div {
                                            class: "stat-row",
                                            div {
                                                class: "stat-labels",
                                                small { "{format_stat_name(&slot.stat.name)}" }
                                                small { "{slot.base_stat}" }
                                            }
                                            div {
                                                class: "stat-track",
                                                div {
                                                    class: "stat-bar",
                                                    style: "width: {stat_bar_width(slot)}%; background-color: {stat_bar_color(slot)};",
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| props.on_close.call(()),
                        "Cerrar"
                    }
                }
            }
        }
    }
}
