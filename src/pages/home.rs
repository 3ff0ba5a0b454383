//! Home page.
//!
//! Owns the page-wide state: the one-second wall-clock tick that
//! drives the nav clock and the prayer countdown, the search overlay
//! flag, and the inquiry toast with its five-second dismiss timer.

use std::time::Duration;

use chrono::Local;
use dioxus::prelude::*;

use crate::components::{
    AboutSection, EventsSection, Footer, GallerySection, Hero, InquiryToast, NavHeader,
    PrayerTimesSection, ScrollTopButton, SearchOverlay, ServicesSection,
};

#[component]
pub fn HomePage() -> Element {
    let mut now = use_signal(Local::now);
    let mut search_open = use_signal(|| false);
    let mut toast: Signal<Option<String>> = use_signal(|| None);
    let mut toast_seq: Signal<u64> = use_signal(|| 0);

    // One ticker for the whole page. The nav clock and the prayer
    // countdown both derive from this signal.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                now.set(Local::now());
            }
        });
    });

    let show_inquiry = move |service: String| {
        let seq = toast_seq() + 1;
        toast_seq.set(seq);
        toast.set(Some(service));
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            // A newer toast restarts the clock; only the latest one
            // gets to dismiss.
            if toast_seq() == seq {
                toast.set(None);
            }
        });
    };

    let dismiss_toast = move |_| {
        toast_seq.set(toast_seq() + 1);
        toast.set(None);
    };

    rsx! {
        div { class: "page",
            NavHeader { now: now(), on_search: move |_| search_open.set(true) }

            main {
                Hero {}
                PrayerTimesSection { now: now() }
                AboutSection {}
                ServicesSection { on_inquiry: show_inquiry }
                EventsSection {}
                GallerySection {}
            }

            Footer {}
            ScrollTopButton {}

            if search_open() {
                SearchOverlay { on_close: move |_| search_open.set(false) }
            }

            if let Some(service) = toast() {
                InquiryToast { service, on_dismiss: dismiss_toast }
            }
        }
    }
}
