use dioxus::prelude::*;

use alfahad_core::{prayer_schedule, PrayerTime};

use crate::pages::{DonatePage, HomePage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Single-page site: hero, prayer times, services, events, gallery, contact
/// - `/donate` - Donation flow with simulated card processing
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    HomePage {},
    #[route("/donate")]
    DonatePage {},
}

/// Root application component.
///
/// Provides global styles, the shared prayer schedule, and routing.
#[component]
pub fn App() -> Element {
    // The schedule is the one editable piece of site content. Edits
    // replace it wholesale and survive route changes but not restarts.
    let schedule: Signal<Vec<PrayerTime>> = use_signal(prayer_schedule);
    use_context_provider(|| schedule);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
