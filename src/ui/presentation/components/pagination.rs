//! Pagination control: first / prev / numbered window / next / last.

use dioxus::prelude::*;

use crate::ui::presentation::helpers::list_pipeline::page_window;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub current: usize,
    pub total: usize,
    pub on_change: EventHandler<usize>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    // Nothing to paginate; the control disappears entirely.
    if props.total == 0 {
        return rsx! {};
    }

    let at_first = props.current == 1;
    let at_last = props.current == props.total;
    let prev = props.current.saturating_sub(1).max(1);
    let next = (props.current + 1).min(props.total);

    rsx! {
        nav {
            class: "pagination-nav",
            ul {
                class: "pagination",
                li {
                    button {
                        class: "page-link",
                        disabled: at_first,
                        onclick: move |_| props.on_change.call(1),
                        "Inicio"
                    }
                }
                li {
                    button {
                        class: "page-link",
                        disabled: at_first,
                        onclick: move |_| props.on_change.call(prev),
                        "«"
                    }
                }
                for page in page_window(props.current, props.total) {
                    li {
                        button {
                            class: if page == props.current { "page-link active" } else { "page-link" },
                            onclick: move |_| props.on_change.call(page),
                            "{page}"
                        }
                    }
                }
                li {
                    button {
                        class: "page-link",
                        disabled: at_last,
                        onclick: move |_| props.on_change.call(next),
                        "»"
                    }
                }
                li {
                    button {
                        class: "page-link",
                        disabled: at_last,
                        onclick: move |_| props.on_change.call(props.total),
                        "Fin"
                    }
                }
            }
        }
    }
}
