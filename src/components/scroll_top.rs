//! Back-to-top control pinned to the bottom-right corner.

use dioxus::prelude::*;

use crate::components::Icon;

#[component]
pub fn ScrollTopButton() -> Element {
    rsx! {
        a { class: "scroll-top", href: "#home", "aria-label": "Scroll to top",
            Icon { name: "ArrowUp", size: 22 }
        }
    }
}
