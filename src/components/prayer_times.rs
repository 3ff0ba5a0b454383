//! Prayer Times Section
//!
//! The daily timetable: the next-prayer banner, the eight-card grid
//! with inline editing, and the prayer detail dialog. The shared
//! schedule signal comes from [`crate::context::use_prayer_schedule`];
//! Save replaces it wholesale, Cancel throws the drafts away.

use chrono::{DateTime, Local};
use dioxus::prelude::*;

use alfahad_core::{next_prayer, ClockTime, PrayerTime};

use crate::components::{DonateCta, Icon};
use crate::context::use_prayer_schedule;

#[component]
pub fn PrayerTimesSection(now: DateTime<Local>) -> Element {
    let mut schedule = use_prayer_schedule();

    let mut editing = use_signal(|| false);
    let mut drafts: Signal<Vec<PrayerTime>> = use_signal(Vec::new);
    let mut selected: Signal<Option<PrayerTime>> = use_signal(|| None);

    let next = next_prayer(&schedule.read(), ClockTime::from_wall_clock(&now));

    let begin_edit = move |_| {
        drafts.set(schedule());
        editing.set(true);
    };
    let save_edit = move |_| {
        tracing::info!(prayers = drafts.read().len(), "prayer schedule replaced");
        schedule.set(drafts());
        editing.set(false);
    };
    let cancel_edit = move |_| {
        editing.set(false);
    };

    // Cards render the drafts while an edit is in flight.
    let prayers = if editing() { drafts() } else { schedule() };

    rsx! {
        section { id: "prayer-times", class: "prayer-section",
            div { class: "section-inner",
                div { class: "section-head centered",
                    div { class: "live-chip",
                        span { class: "live-dot" }
                        "Live Prayer Schedule"
                    }
                    h2 { class: "section-title", "Daily Prayer Times" }
                    p { class: "section-subtitle",
                        "Join us for congregational prayers at Mosjid Al Fahad. Times are updated daily to reflect the solar calendar."
                    }
                }

                if let Some(next) = &next {
                    div { class: "next-prayer-banner",
                        div { class: "next-prayer-who",
                            div { class: "next-prayer-clock", Icon { name: "Clock", size: 30 } }
                            div {
                                p { class: "next-prayer-label", "Next Prayer" }
                                h3 { class: "next-prayer-name", "{next.name}" }
                            }
                        }
                        div { class: "next-prayer-divider" }
                        div { class: "next-prayer-when",
                            p { class: "next-prayer-label", "Starts In" }
                            p { class: "next-prayer-countdown", "{next.countdown()}" }
                        }
                    }
                }

                div { class: "edit-toolbar",
                    if editing() {
                        button { class: "edit-button solid", r#type: "button", onclick: save_edit,
                            Icon { name: "Save", size: 16 }
                            "Save Changes"
                        }
                        button { class: "edit-button muted", r#type: "button", onclick: cancel_edit,
                            Icon { name: "RotateCcw", size: 16 }
                            "Cancel"
                        }
                    } else {
                        button { class: "edit-button", r#type: "button", onclick: begin_edit,
                            Icon { name: "Edit2", size: 16 }
                            "Edit Times"
                        }
                    }
                }

                div { class: "prayer-grid",
                    for (index, prayer) in prayers.iter().enumerate() {
                        PrayerCard {
                            key: "{prayer.name}",
                            prayer: prayer.clone(),
                            is_next: next.as_ref().map_or(false, |n| n.name == prayer.name),
                            editing: editing(),
                            on_time_change: move |time| drafts.write()[index].time = time,
                            on_select: move |picked| selected.set(Some(picked)),
                        }
                    }
                }

                DonateCta {
                    title: "Help us maintain our sanctuary?",
                    text: "Your donations help us keep the mosque clean, comfortable, and open for all.",
                    action: "Support Our Sanctuary",
                }
            }
        }

        if let Some(prayer) = selected() {
            PrayerModal { prayer, on_close: move |_| selected.set(None) }
        }
    }
}

/// One tile in the timetable grid. Clicking it opens the detail
/// dialog unless an edit is in flight, in which case the time becomes
/// a free-text input.
#[component]
fn PrayerCard(
    prayer: PrayerTime,
    is_next: bool,
    editing: bool,
    on_time_change: EventHandler<String>,
    on_select: EventHandler<PrayerTime>,
) -> Element {
    let card_class = if is_next {
        "prayer-card next"
    } else if prayer.name == "Jummah" {
        "prayer-card jummah"
    } else {
        "prayer-card"
    };
    let picked = prayer.clone();

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| {
                if !editing {
                    on_select.call(picked.clone());
                }
            },
            if is_next {
                span { class: "prayer-ping" }
            }
            div { class: "prayer-icon-chip", Icon { name: "Clock", size: 24 } }
            h3 { class: "prayer-name", "{prayer.name}" }
            if editing {
                input {
                    class: "prayer-time-input",
                    r#type: "text",
                    value: "{prayer.time}",
                    onclick: move |evt| evt.stop_propagation(),
                    oninput: move |evt| on_time_change.call(evt.value()),
                }
            } else {
                p { class: "prayer-time", "{prayer.time}" }
            }
            if is_next {
                p { class: "prayer-next-tag", "Next Prayer" }
            }
        }
    }
}

#[component]
fn PrayerModal(prayer: PrayerTime, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div { class: "prayer-modal", onclick: move |evt| evt.stop_propagation(),
                div { class: "prayer-modal-head",
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { name: "X", size: 22 }
                    }
                    div { class: "prayer-modal-icon", Icon { name: "Clock", size: 44 } }
                    p { class: "prayer-modal-kicker", "{prayer.name} Prayer" }
                    p { class: "prayer-modal-time", "{prayer.time}" }
                }
                div { class: "prayer-modal-body",
                    p { class: "prayer-modal-text", "{prayer.description}" }
                    button {
                        class: "gold-button wide",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Close Details"
                    }
                }
            }
        }
    }
}
