//! Inline Lucide iconography
//!
//! Icons render as inline SVG strokes so they pick up currentColor from
//! the surrounding text. Unrecognized names fall back to BookOpen,
//! matching the loose symbolic naming in the services catalog.

use dioxus::prelude::*;

/// A Lucide icon referenced by its symbolic name (e.g. "BookOpen").
#[component]
pub fn Icon(
    /// Symbolic icon name
    name: String,
    /// Square size in pixels
    #[props(default = 24)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {icon_body(&name)}
        }
    }
}

fn icon_body(name: &str) -> Element {
    match name {
        "Heart" => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.29 1.51 4.04 3 5.5l7 7Z" }
        },
        "Users" => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        "Utensils" => rsx! {
            path { d: "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2" }
            path { d: "M7 2v20" }
            path { d: "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7" }
        },
        "Clock" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 6v6l4 2" }
        },
        "Calendar" => rsx! {
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M3 10h18" }
        },
        "MapPin" => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        "Phone" => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        "Mail" => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        "Instagram" => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            path { d: "M17.5 6.5h.01" }
        },
        "Facebook" => rsx! {
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        },
        "Twitter" => rsx! {
            path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
        },
        "Menu" => rsx! {
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        },
        "X" => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        "ChevronRight" => rsx! {
            path { d: "m9 18 6-6-6-6" }
        },
        "Edit2" => rsx! {
            path { d: "M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3z" }
        },
        "Save" => rsx! {
            path { d: "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z" }
            path { d: "M17 21v-8H7v8" }
            path { d: "M7 3v5h8" }
        },
        "RotateCcw" => rsx! {
            path { d: "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" }
            path { d: "M3 3v5h5" }
        },
        "ArrowUp" => rsx! {
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        },
        "ArrowLeft" => rsx! {
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        },
        "Search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        "Check" => rsx! {
            path { d: "M20 6 9 17l-5-5" }
        },
        "CreditCard" => rsx! {
            rect { x: "2", y: "5", width: "20", height: "14", rx: "2" }
            path { d: "M2 10h20" }
        },
        "Banknote" => rsx! {
            rect { x: "2", y: "6", width: "20", height: "12", rx: "2" }
            circle { cx: "12", cy: "12", r: "2" }
            path { d: "M6 12h.01M18 12h.01" }
        },
        "ShieldCheck" => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            path { d: "m9 12 2 2 4-4" }
        },
        "DollarSign" => rsx! {
            path { d: "M12 2v20" }
            path { d: "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" }
        },
        "Gift" => rsx! {
            rect { x: "3", y: "8", width: "18", height: "4", rx: "1" }
            path { d: "M12 8v13" }
            path { d: "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" }
            path { d: "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" }
        },
        // BookOpen doubles as the fallback
        _ => rsx! {
            path { d: "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" }
        },
    }
}

/// The dome-and-minaret mark used in the header and footer.
#[component]
pub fn MosqueLogo(
    /// Square size in pixels
    #[props(default = 40)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 100 100",
            fill: "none",
            path {
                d: "M50 10C50 10 30 30 30 50C30 70 50 90 50 90C50 90 70 70 70 50C70 30 50 10 50 10Z",
                fill: "currentColor",
            }
            path { d: "M20 90H80V95H20V90Z", fill: "currentColor" }
            path {
                d: "M45 5V15M55 5V15M50 2V8",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
            }
            circle { cx: "50", cy: "50", r: "10", fill: "white", fill_opacity: "0.2" }
        }
    }
}
