//! Events Section
//!
//! Upcoming event cards with a simulated detail fetch behind the
//! "Learn More" button, per-title registration state, and the
//! long-form detail modal rendered from markdown.

use std::collections::HashSet;
use std::time::Duration;

use dioxus::prelude::*;

use alfahad_core::{event_details, upcoming_events, Event};

use crate::components::{DonateCta, Icon, MarkdownRenderer};

#[component]
pub fn EventsSection() -> Element {
    // Registrations are keyed by event title and live only for the session.
    let mut registered: Signal<HashSet<String>> = use_signal(HashSet::new);
    let mut loading_details: Signal<Option<String>> = use_signal(|| None);
    let mut selected: Signal<Option<Event>> = use_signal(|| None);

    let learn_more = move |event: Event| {
        loading_details.set(Some(event.id.clone()));
        spawn(async move {
            // Detail text ships with the binary; the delay stands in for
            // the backend fetch.
            tokio::time::sleep(Duration::from_millis(600)).await;
            selected.set(Some(event));
            loading_details.set(None);
        });
    };

    let register = move |title: String| {
        tracing::info!(event = %title, "event registration");
        registered.write().insert(title);
    };

    rsx! {
        section { id: "events", class: "events-section",
            div { class: "section-inner",
                div { class: "section-head split",
                    div {
                        span { class: "section-kicker", "Stay Connected" }
                        h2 { class: "section-title", "Upcoming Events" }
                    }
                    button { class: "text-button underlined", r#type: "button", "View All Events" }
                }

                div { class: "events-grid",
                    for event in upcoming_events() {
                        EventCard {
                            key: "{event.id}",
                            event: event.clone(),
                            registered: registered.read().contains(&event.title),
                            loading: loading_details.read().as_deref() == Some(event.id.as_str()),
                            on_learn_more: learn_more,
                            on_register: register,
                        }
                    }
                }

                DonateCta {
                    title: "Help us organize more events?",
                    text: "Your donations help us cover the costs of community gatherings and educational programs.",
                    action: "Support Our Events",
                }
            }
        }

        if let Some(event) = selected() {
            EventModal {
                event: event.clone(),
                registered: registered.read().contains(&event.title),
                on_register: register,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn EventCard(
    event: Event,
    registered: bool,
    loading: bool,
    on_learn_more: EventHandler<Event>,
    on_register: EventHandler<String>,
) -> Element {
    let fetched = event.clone();
    let title = event.title.clone();

    rsx! {
        div { class: "event-card",
            div { class: "event-date",
                Icon { name: "Calendar", size: 18 }
                span { "{event.date}" }
            }
            h3 { class: "event-title", "{event.title}" }
            p { class: "event-blurb", "{event.description}" }

            div { class: "event-actions",
                button {
                    class: "outline-button",
                    r#type: "button",
                    disabled: loading,
                    onclick: move |_| on_learn_more.call(fetched.clone()),
                    if loading {
                        span { class: "button-spinner dark" }
                    } else {
                        "Learn More"
                    }
                }
                if registered {
                    div { class: "registered-note",
                        Icon { name: "Check", size: 16 }
                        "Registration successful!"
                    }
                } else {
                    button {
                        class: "gold-button",
                        r#type: "button",
                        onclick: move |_| on_register.call(title.clone()),
                        "Register"
                    }
                }
            }
        }
    }
}

#[component]
fn EventModal(
    event: Event,
    registered: bool,
    on_register: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let title = event.title.clone();
    let details = event_details(&event.id).unwrap_or_default();

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div { class: "detail-modal", onclick: move |evt| evt.stop_propagation(),
                div { class: "detail-modal-media",
                    img { src: "{event.image_url}", alt: "{event.title}" }
                    div { class: "detail-modal-scrim",
                        div { class: "detail-modal-heading stacked",
                            div { class: "event-date on-image",
                                Icon { name: "Calendar", size: 16 }
                                span { "{event.date}" }
                            }
                            h2 { class: "detail-modal-title", "{event.title}" }
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
                    p { class: "detail-modal-text", "{event.description}" }
                    if !details.is_empty() {
                        div { class: "event-details-box",
                            MarkdownRenderer { content: details.to_string() }
                        }
                    }
                    div { class: "modal-actions",
                        if registered {
                            div { class: "registered-note grow",
                                Icon { name: "Check", size: 18 }
                                "Registration successful!"
                            }
                        } else {
                            button {
                                class: "gold-button grow",
                                r#type: "button",
                                onclick: move |_| {
                                    on_register.call(title.clone());
                                    on_close.call(());
                                },
                                Icon { name: "Heart", size: 20 }
                                "Register Now"
                            }
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
