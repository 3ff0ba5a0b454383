//! Navigation Header Component
//!
//! Fixed header with the mosque brand, section links, search, a live
//! clock, and the donate action. Collapses to a toggle menu on narrow
//! windows.

use chrono::{DateTime, Local};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Icon, MosqueLogo};

/// Section anchors on the home page
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum HomeSection {
    Home,
    PrayerTimes,
    About,
    Services,
    Events,
    Gallery,
}

impl HomeSection {
    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            HomeSection::Home => "Home",
            HomeSection::PrayerTimes => "Prayer Times",
            HomeSection::About => "About",
            HomeSection::Services => "Services",
            HomeSection::Events => "Events",
            HomeSection::Gallery => "Gallery",
        }
    }

    /// Get the in-page anchor this section's link scrolls to
    pub fn anchor(&self) -> &'static str {
        match self {
            HomeSection::Home => "#home",
            HomeSection::PrayerTimes => "#prayer-times",
            HomeSection::About => "#about",
            HomeSection::Services => "#services",
            HomeSection::Events => "#events",
            HomeSection::Gallery => "#gallery",
        }
    }

    pub fn all() -> &'static [HomeSection] {
        &[
            HomeSection::Home,
            HomeSection::PrayerTimes,
            HomeSection::About,
            HomeSection::Services,
            HomeSection::Events,
            HomeSection::Gallery,
        ]
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Wall-clock instant shown in the header, ticked by the home page
    pub now: DateTime<Local>,
    /// Callback when the search button is pressed
    pub on_search: EventHandler<()>,
}

/// Navigation Header component
///
/// - Left: dome logo and "Mosjid Al Fahad" brand
/// - Center: section anchor links
/// - Right: search button, live clock, donate button
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut menu_open = use_signal(|| false);
    let on_search = props.on_search;

    let clock = props.now.format("%I:%M %p").to_string();
    let seconds = props.now.format("%S").to_string();

    rsx! {
        header { class: "site-nav",
            div { class: "nav-inner",
                a { class: "nav-brand", href: "#home",
                    MosqueLogo { size: 44 }
                    div { class: "brand-text",
                        span { class: "brand-name", "Mosjid Al Fahad" }
                        span { class: "brand-sub", "Islamic Center" }
                    }
                }

                nav { class: "nav-links",
                    for section in HomeSection::all() {
                        a {
                            class: "nav-link",
                            href: "{section.anchor()}",
                            "{section.display_name()}"
                        }
                    }

                    button {
                        r#type: "button",
                        class: "nav-icon-button",
                        onclick: move |_| on_search.call(()),
                        "aria-label": "Search",
                        Icon { name: "Search", size: 20 }
                    }

                    div { class: "nav-clock",
                        p { class: "nav-clock-label", "Current Time" }
                        p { class: "nav-clock-time",
                            "{clock}"
                            span { class: "nav-clock-seconds", "{seconds}" }
                        }
                    }

                    Link { class: "nav-donate-button", to: Route::DonatePage {},
                        Icon { name: "Heart", size: 16 }
                        "Donate"
                    }
                }

                button {
                    r#type: "button",
                    class: "nav-menu-button",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "aria-label": "Menu",
                    if menu_open() {
                        Icon { name: "X", size: 24 }
                    } else {
                        Icon { name: "Menu", size: 24 }
                    }
                }
            }

            // Collapsed menu for narrow windows
            if menu_open() {
                div { class: "mobile-menu",
                    for section in HomeSection::all() {
                        a {
                            class: "mobile-link",
                            href: "{section.anchor()}",
                            onclick: move |_| menu_open.set(false),
                            "{section.display_name()}"
                        }
                    }
                    Link { class: "nav-donate-button wide", to: Route::DonatePage {},
                        Icon { name: "Heart", size: 16 }
                        "Donate Now"
                    }
                }
            }
        }
    }
}
