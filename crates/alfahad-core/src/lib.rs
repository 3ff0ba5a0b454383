//! Mosjid Al Fahad Core Library
//!
//! Content model and prayer scheduling for the mosque desktop app.
//!
//! ## Overview
//!
//! The site content (prayer timetable, services, events, gallery) is
//! compiled in; nothing is fetched at runtime. The one dynamic piece is
//! the prayer schedule, which the UI can replace wholesale through the
//! edit flow, and the scheduler that picks the next upcoming prayer
//! from whatever schedule is current.
//!
//! ## Scheduling
//!
//! - **Minute resolution**: times are "HH:MM AM/PM" strings, parsed at
//!   the point of use
//! - **Strictly after**: a prayer starting this very minute is already
//!   underway, not next
//! - **Wrap-around**: past the day's last prayer, the countdown targets
//!   tomorrow's earliest
//!
//! ## Quick Start
//!
//! ```
//! use alfahad_core::{next_prayer, prayer_schedule, ClockTime};
//!
//! let schedule = prayer_schedule();
//! let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();
//! assert_eq!(next.name, "Dhuhr");
//! assert_eq!(next.countdown(), "2h 30m");
//! ```

pub mod content;
pub mod error;
pub mod schedule;
pub mod search;

// Re-exports
pub use content::{
    about_story, event_details, gallery, prayer_schedule, services, upcoming_events, Event,
    GalleryCategory, GalleryItem, PrayerTime, Service,
};
pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{next_prayer, ClockTime, NextPrayer, MINUTES_PER_DAY, NON_ROTATING};
pub use search::{search_site, SearchHit, SearchKind};
