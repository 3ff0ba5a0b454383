//! Footer
//!
//! Brand column, quick links, contact details, and the message form
//! with its temporary success state.

use std::time::Duration;

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Icon, MosqueLogo};

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { id: "contact", class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    div { class: "footer-brand-row",
                        MosqueLogo { size: 48 }
                        div { class: "brand-text",
                            span { class: "brand-name on-dark", "Mosjid Al Fahad" }
                            span { class: "brand-sub gold", "Islamic Center" }
                        }
                    }
                    p { class: "footer-blurb",
                        "A place of worship, community, and peace. Dedicated to serving the spiritual and social needs of our neighborhood."
                    }
                    div { class: "footer-social",
                        for network in ["Facebook", "Instagram", "Twitter"] {
                            button {
                                class: "social-button",
                                r#type: "button",
                                "aria-label": "{network}",
                                Icon { name: network.to_string(), size: 18 }
                            }
                        }
                    }
                    Link { class: "gold-button small", to: Route::DonatePage {},
                        Icon { name: "Heart", size: 16 }
                        "Support Our Mosque"
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-links",
                        li { a { href: "#home", "Home" } }
                        li { a { href: "#about", "Our Story" } }
                        li { a { href: "#services", "Services" } }
                        li { a { href: "#events", "Events" } }
                        li { a { href: "#gallery", "Gallery" } }
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Contact Us" }
                    ul { class: "footer-contact",
                        li {
                            Icon { name: "MapPin", size: 20 }
                            span { "123 Islamic Center Way, Faith City, FC 54321" }
                        }
                        li {
                            Icon { name: "Phone", size: 20 }
                            span { "+1 (555) 123-4567" }
                        }
                        li {
                            Icon { name: "Mail", size: 20 }
                            span { "info@mosjidalfahad.org" }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Send a Message" }
                    ContactForm {}
                }
            }

            div { class: "footer-bottom",
                p { "© {year} Mosjid Al Fahad. All rights reserved. Designed with peace and purpose." }
            }
        }
    }
}

/// Three required fields and a submit that clears them, shows a
/// success panel, and quietly reverts after five seconds.
#[component]
fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sent() {
            return;
        }
        tracing::info!(from = %name(), "contact message submitted");
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        sent.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            sent.set(false);
        });
    };

    rsx! {
        if sent() {
            div { class: "contact-success",
                div { class: "contact-success-icon", Icon { name: "Check", size: 24 } }
                p { class: "contact-success-title", "Message Sent!" }
                p { class: "contact-success-text", "Thank you for reaching out. We will get back to you soon." }
            }
        } else {
            form { class: "contact-form", onsubmit: submit,
                input {
                    class: "contact-input",
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "contact-input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }
                textarea {
                    class: "contact-input",
                    placeholder: "Message",
                    rows: 3,
                    required: true,
                    value: "{message()}",
                    oninput: move |evt| message.set(evt.value()),
                }
                button { class: "gold-button wide", r#type: "submit", "Send Message" }
            }
        }
    }
}
