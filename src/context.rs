//! Prayer schedule context for Mosjid Al Fahad.
//!
//! The editable schedule lives in a root-level signal so the prayer
//! grid, the edit dialog, and the next-prayer panel all read one copy.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let schedule = use_prayer_schedule();
//! let next = next_prayer(&schedule.read(), now);
//! ```

use dioxus::prelude::*;

use alfahad_core::PrayerTime;

/// Hook to access the shared prayer schedule from context.
///
/// Returns a reactive signal holding the full ordered schedule. The
/// edit flow replaces the vector wholesale on save, which re-renders
/// every subscriber in the same frame.
pub fn use_prayer_schedule() -> Signal<Vec<PrayerTime>> {
    use_context::<Signal<Vec<PrayerTime>>>()
}
