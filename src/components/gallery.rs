//! Gallery Section
//!
//! Filterable photo wall laid out in CSS columns, with a fullscreen
//! lightbox for individual photos.

use dioxus::prelude::*;

use alfahad_core::{gallery, GalleryCategory, GalleryItem};

use crate::components::{DonateCta, Icon};

#[component]
pub fn GallerySection() -> Element {
    // None means the "All" pill is active.
    let mut filter: Signal<Option<GalleryCategory>> = use_signal(|| None);
    let mut lightbox: Signal<Option<GalleryItem>> = use_signal(|| None);

    let visible: Vec<GalleryItem> = gallery()
        .into_iter()
        .filter(|item| filter().map_or(true, |wanted| item.category == wanted))
        .collect();

    rsx! {
        section { id: "gallery", class: "gallery-section",
            div { class: "section-inner",
                div { class: "section-head centered",
                    h2 { class: "section-title", "Photo Gallery" }
                    div { class: "gold-bar" }
                }

                div { class: "gallery-filters",
                    button {
                        class: if filter().is_none() { "filter-pill active" } else { "filter-pill" },
                        r#type: "button",
                        onclick: move |_| filter.set(None),
                        "All"
                    }
                    for category in GalleryCategory::all() {
                        button {
                            class: if filter() == Some(*category) { "filter-pill active" } else { "filter-pill" },
                            r#type: "button",
                            onclick: move |_| filter.set(Some(*category)),
                            "{category.as_str()}"
                        }
                    }
                }

                div { class: "gallery-columns",
                    for item in visible {
                        GalleryTile {
                            key: "{item.title}",
                            item,
                            on_open: move |picked| lightbox.set(Some(picked)),
                        }
                    }
                }

                DonateCta {
                    title: "Help us capture more moments?",
                    text: "Your support helps us expand our facilities and create more memories together.",
                    action: "Support Our Growth",
                }
            }
        }

        if let Some(item) = lightbox() {
            GalleryLightbox { item, on_close: move |_| lightbox.set(None) }
        }
    }
}

#[component]
fn GalleryTile(item: GalleryItem, on_open: EventHandler<GalleryItem>) -> Element {
    let picked = item.clone();

    rsx! {
        div { class: "gallery-tile", onclick: move |_| on_open.call(picked.clone()),
            img { src: "{item.image_url}", alt: "{item.title}", loading: "lazy" }
            div { class: "gallery-tile-overlay",
                span { class: "tile-category", "{item.category.as_str()}" }
                h3 { class: "tile-title", "{item.title}" }
            }
        }
    }
}

#[component]
fn GalleryLightbox(item: GalleryItem, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "lightbox-overlay", onclick: move |_| on_close.call(()),
            button {
                class: "modal-close floating",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                Icon { name: "X", size: 28 }
            }
            div { class: "lightbox-content", onclick: move |evt| evt.stop_propagation(),
                img { class: "lightbox-image", src: "{item.image_url}", alt: "{item.title}" }
                div { class: "lightbox-caption",
                    span { class: "tile-category", "{item.category.as_str()}" }
                    h3 { class: "lightbox-title", "{item.title}" }
                }
            }
        }
    }
}
