//! About Section
//!
//! The "Our Story" prose beside a framed photo of the prayer hall.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Icon, MarkdownRenderer};

const ABOUT_IMAGE: &str = "https://i.postimg.cc/3rDfBjjQ/image.png";

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about-section",
            div { class: "section-inner about-grid",
                div { class: "about-photo-frame",
                    div { class: "frame-corner top-left" }
                    div { class: "frame-corner bottom-right" }
                    img { class: "about-photo", src: "{ABOUT_IMAGE}", alt: "Prayer hall" }
                }

                div { class: "about-copy",
                    span { class: "section-kicker", "Our Story" }
                    h2 { class: "section-title", "A Center for Worship & Unity" }
                    MarkdownRenderer { content: alfahad_core::about_story().to_string() }
                    div { class: "about-actions",
                        button { class: "text-button", r#type: "button",
                            "Learn More About Our History"
                            Icon { name: "ChevronRight", size: 20 }
                        }
                        Link { class: "gold-button", to: Route::DonatePage {},
                            Icon { name: "Heart", size: 20 }
                            "Support Our Mission"
                        }
                    }
                }
            }
        }
    }
}
