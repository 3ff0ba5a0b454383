//! Search Overlay
//!
//! Fullscreen search across services, events, and gallery titles.
//! Results link to their home-page section and close the overlay when
//! followed. Matching itself lives in [`alfahad_core::search_site`].

use dioxus::prelude::*;

use alfahad_core::{search_site, SearchHit};

use crate::components::Icon;

#[component]
pub fn SearchOverlay(on_close: EventHandler<()>) -> Element {
    let mut query = use_signal(String::new);

    let hits: Vec<SearchHit> = search_site(&query());
    let typed = !query().trim().is_empty();

    rsx! {
        div { class: "search-overlay",
            div { class: "search-panel",
                div { class: "search-head",
                    h2 { class: "search-heading", "Search Site" }
                    button {
                        class: "search-close",
                        "aria-label": "Close search",
                        onclick: move |_| on_close.call(()),
                        Icon { name: "X", size: 28 }
                    }
                }

                div { class: "search-input-wrap",
                    span { class: "search-input-icon", Icon { name: "Search", size: 24 } }
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Type to search services, events, or gallery...",
                        value: "{query()}",
                        autofocus: true,
                        oninput: move |evt| query.set(evt.value()),
                    }
                }

                div { class: "search-results",
                    if !hits.is_empty() {
                        for hit in hits {
                            a {
                                class: "search-hit",
                                href: "{hit.anchor()}",
                                onclick: move |_| on_close.call(()),
                                div { class: "search-hit-head",
                                    span { class: "search-hit-kind", "{hit.kind.label()}" }
                                    Icon { name: "ChevronRight", size: 18 }
                                }
                                h3 { class: "search-hit-title", "{hit.title}" }
                                if let Some(snippet) = &hit.snippet {
                                    p { class: "search-hit-snippet", "{snippet}" }
                                }
                            }
                        }
                    } else if typed {
                        p { class: "search-empty", "No results found for \"{query()}\"" }
                    } else {
                        p { class: "search-empty", "Start typing to see results..." }
                    }
                }
            }
        }
    }
}
