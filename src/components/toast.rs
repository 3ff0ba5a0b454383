//! Inquiry Success Toast
//!
//! Bottom-centered confirmation raised after a service inquiry. The
//! parent owns the auto-dismiss timer; this component only renders and
//! forwards manual dismissal.

use dioxus::prelude::*;

use crate::components::Icon;

#[component]
pub fn InquiryToast(
    /// Title of the service the inquiry was about
    service: String,
    /// Callback when the toast is dismissed manually
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "toast",
            div { class: "toast-icon",
                Icon { name: "Heart", size: 22 }
            }
            div { class: "toast-body",
                p { class: "toast-title", "Inquiry Sent Successfully!" }
                p { class: "toast-text",
                    "We will contact you regarding "
                    span { class: "toast-highlight", "{service}" }
                    " soon."
                }
            }
            div { class: "toast-actions",
                button {
                    class: "toast-close-button",
                    onclick: move |_| on_dismiss.call(()),
                    "Close"
                }
                button {
                    class: "toast-dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "aria-label": "Dismiss",
                    Icon { name: "X", size: 18 }
                }
            }
        }
    }
}
