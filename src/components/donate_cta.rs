//! Donation call-to-action banner
//!
//! Each content section closes with one of these, pointing at the
//! donation page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Icon;

#[component]
pub fn DonateCta(
    /// Banner headline
    title: String,
    /// Supporting line under the headline
    text: String,
    /// Label on the gold action button
    action: String,
    /// Glassy variant for dark sections
    #[props(default = false)]
    on_dark: bool,
) -> Element {
    let banner_class = if on_dark { "donate-cta on-dark" } else { "donate-cta" };

    rsx! {
        div { class: "{banner_class}",
            div { class: "donate-cta-copy",
                h3 { class: "donate-cta-title", "{title}" }
                p { class: "donate-cta-text", "{text}" }
            }
            Link { class: "gold-button", to: Route::DonatePage {},
                Icon { name: "Heart", size: 20 }
                "{action}"
            }
        }
    }
}
