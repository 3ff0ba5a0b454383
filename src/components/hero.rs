//! Hero Section
//!
//! Full-height opener with the mosque photo, name, and the two primary
//! calls to action.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Icon;

const HERO_IMAGE: &str = "https://i.postimg.cc/7Z4RbC2v/image.png";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-backdrop",
                img { src: "{HERO_IMAGE}", alt: "Mosjid Al Fahad" }
                div { class: "hero-overlay" }
            }

            div { class: "hero-content",
                h1 { class: "hero-title", "Mosjid Al Fahad" }
                p { class: "hero-tagline", "“A Place of Peace, Prayer & Community”" }
                div { class: "hero-actions",
                    a { class: "glass-button", href: "#prayer-times", "View Prayer Times" }
                    Link { class: "gold-button large", to: Route::DonatePage {},
                        Icon { name: "Heart", size: 22 }
                        "Donate Now"
                    }
                }
            }

            div { class: "hero-scroll-cue",
                div { class: "scroll-mouse",
                    div { class: "scroll-wheel" }
                }
            }
        }
    }
}
