//! Services Section
//!
//! The program catalog on the dark emerald band, with a detail modal
//! and the inquiry action that feeds the confirmation toast.

use dioxus::prelude::*;

use alfahad_core::{services, Service};

use crate::components::{DonateCta, Icon};

#[component]
pub fn ServicesSection(on_inquiry: EventHandler<String>) -> Element {
    let mut selected: Signal<Option<Service>> = use_signal(|| None);

    rsx! {
        section { id: "services", class: "services-section",
            div { class: "section-inner",
                div { class: "section-head centered",
                    h2 { class: "section-title on-dark", "Our Services" }
                    div { class: "gold-bar" }
                }

                div { class: "services-grid",
                    for service in services() {
                        ServiceCard {
                            key: "{service.id}",
                            service,
                            on_open: move |picked| selected.set(Some(picked)),
                        }
                    }
                }

                DonateCta {
                    on_dark: true,
                    title: "Want to support these services?",
                    text: "Your contributions directly fund our educational and community programs.",
                    action: "Support Our Community",
                }
            }
        }

        if let Some(service) = selected() {
            ServiceModal {
                service,
                on_close: move |_| selected.set(None),
                on_inquiry,
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, on_open: EventHandler<Service>) -> Element {
    let picked = service.clone();

    rsx! {
        div { class: "service-card",
            div { class: "service-icon-chip", Icon { name: service.icon.clone(), size: 28 } }
            h3 { class: "service-title", "{service.title}" }
            p { class: "service-blurb", "{service.description}" }
            button {
                class: "service-more",
                r#type: "button",
                onclick: move |_| on_open.call(picked.clone()),
                "Read More"
                Icon { name: "ChevronRight", size: 16 }
            }
        }
    }
}

#[component]
fn ServiceModal(
    service: Service,
    on_close: EventHandler<()>,
    on_inquiry: EventHandler<String>,
) -> Element {
    let inquired = service.title.clone();

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div { class: "detail-modal", onclick: move |evt| evt.stop_propagation(),
                div { class: "detail-modal-media",
                    img { src: "{service.image_url}", alt: "{service.title}" }
                    div { class: "detail-modal-scrim",
                        div { class: "detail-modal-heading",
                            div { class: "service-icon-chip tilted", Icon { name: service.icon.clone(), size: 32 } }
                            h2 { class: "detail-modal-title", "{service.title}" }
                        }
                    }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { name: "X", size: 22 }
                    }
                }
                div { class: "detail-modal-body",
                    p { class: "detail-modal-text", "{service.description}" }
                    div { class: "modal-actions",
                        button {
                            class: "gold-button grow",
                            r#type: "button",
                            onclick: move |_| {
                                on_inquiry.call(inquired.clone());
                                on_close.call(());
                            },
                            Icon { name: "Mail", size: 20 }
                            "Inquire Now"
                        }
                        button {
                            class: "ghost-button",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
