//! Next-prayer selection over the daily timetable
//!
//! The schedule is a flat list of display times ("HH:MM AM/PM"). Selection
//! treats the day as a 1440-minute circle: the next prayer is the first
//! candidate strictly after the reference instant, wrapping to tomorrow's
//! earliest when the day's prayers are all behind us. Entries that are not
//! congregational rotation members (Sunrise, Sunset, Jummah) are shown but
//! never selected.

use std::fmt;

use crate::content::PrayerTime;
use crate::error::{ScheduleError, ScheduleResult};

/// Minutes in one day; the wrap-around modulus for countdowns.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Schedule entries displayed but never selected as "next".
///
/// Sunrise and Sunset are solar markers, not prayers, and Jummah only
/// replaces Dhuhr on Fridays.
pub const NON_ROTATING: [&str; 3] = ["Sunrise", "Sunset", "Jummah"];

/// A wall-clock instant, minute resolution, 24-hour internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Parses a display time like `"05:15 AM"`.
    ///
    /// The dial hour must be 1-12; 12 AM maps to hour 0 and 12 PM stays 12.
    /// The meridiem marker is case-insensitive. Anything else is rejected
    /// with a [`ScheduleError`] naming the offending component.
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        let trimmed = text.trim();
        let (dial, meridiem) = match trimmed.split_once(' ') {
            Some(pair) => pair,
            None => return Err(ScheduleError::MalformedTime(text.to_string())),
        };
        let (hour_text, minute_text) = match dial.split_once(':') {
            Some(pair) => pair,
            None => return Err(ScheduleError::MalformedTime(text.to_string())),
        };

        let hour: u32 = hour_text
            .trim()
            .parse()
            .map_err(|_| ScheduleError::MalformedTime(text.to_string()))?;
        let minute: u32 = minute_text
            .trim()
            .parse()
            .map_err(|_| ScheduleError::MalformedTime(text.to_string()))?;

        if !(1..=12).contains(&hour) {
            return Err(ScheduleError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::MinuteOutOfRange(minute));
        }

        let hour24 = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => {
                if hour == 12 {
                    0
                } else {
                    hour
                }
            }
            "PM" => {
                if hour == 12 {
                    12
                } else {
                    hour + 12
                }
            }
            other => return Err(ScheduleError::UnknownMeridiem(other.to_string())),
        };

        Ok(Self {
            hour: hour24 as u8,
            minute: minute as u8,
        })
    }

    /// Reads the hour and minute off any chrono time-like value.
    pub fn from_wall_clock<T: chrono::Timelike>(now: &T) -> Self {
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
        }
    }

    /// Position on the day circle, 0-1439.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for ClockTime {
    /// Renders back to the 12-hour display form, e.g. `"05:15 AM"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let dial_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02} {}", dial_hour, self.minute, meridiem)
    }
}

/// The winning prayer and how far away it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: String,
    /// Whole minutes until it begins; always 1..=1440.
    pub minutes_remaining: u32,
}

impl NextPrayer {
    /// Countdown in the `"Xh Ym"` form shown under the prayer name.
    pub fn countdown(&self) -> String {
        format!(
            "{}h {}m",
            self.minutes_remaining / 60,
            self.minutes_remaining % 60
        )
    }
}

/// Picks the next prayer strictly after `now`.
///
/// Non-rotating entries are filtered out first. Entries whose time fails
/// to parse are skipped with a warning rather than failing the whole
/// selection, so one bad edit never blanks the countdown. Ties on the
/// same minute keep schedule order. Returns `None` only when no entry
/// survives the filters.
pub fn next_prayer(schedule: &[PrayerTime], now: ClockTime) -> Option<NextPrayer> {
    let now_minutes = now.minutes_since_midnight();

    let mut candidates: Vec<(u32, &str)> = Vec::new();
    for prayer in schedule {
        if NON_ROTATING.contains(&prayer.name.as_str()) {
            continue;
        }
        match ClockTime::parse(&prayer.time) {
            Ok(time) => candidates.push((time.minutes_since_midnight(), prayer.name.as_str())),
            Err(err) => {
                tracing::warn!(
                    "Skipping {} with unreadable time {:?}: {}",
                    prayer.name,
                    prayer.time,
                    err
                );
            }
        }
    }
    if candidates.is_empty() {
        return None;
    }
    // Stable sort keeps schedule order for same-minute ties.
    candidates.sort_by_key(|(minutes, _)| *minutes);

    if let Some((minutes, name)) = candidates.iter().find(|(m, _)| *m > now_minutes) {
        return Some(NextPrayer {
            name: (*name).to_string(),
            minutes_remaining: minutes - now_minutes,
        });
    }

    // Everything today is behind us; wrap to tomorrow's earliest.
    let (first_minutes, first_name) = candidates[0];
    Some(NextPrayer {
        name: first_name.to_string(),
        minutes_remaining: (MINUTES_PER_DAY - now_minutes) + first_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, time: &str) -> PrayerTime {
        PrayerTime::new(name, time, "")
    }

    #[test]
    fn test_parse_morning_time() {
        assert_eq!(ClockTime::parse("05:15 AM").unwrap(), ClockTime::new(5, 15));
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        // 12 PM is noon, 12 AM is midnight
        assert_eq!(ClockTime::parse("12:30 PM").unwrap(), ClockTime::new(12, 30));
        assert_eq!(ClockTime::parse("12:05 AM").unwrap(), ClockTime::new(0, 5));
    }

    #[test]
    fn test_parse_afternoon_adds_twelve() {
        assert_eq!(ClockTime::parse("03:45 PM").unwrap(), ClockTime::new(15, 45));
        assert_eq!(ClockTime::parse("07:45 PM").unwrap(), ClockTime::new(19, 45));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(ClockTime::parse("  07:45 pm "), Ok(ClockTime::new(19, 45)));
        assert_eq!(ClockTime::parse("05:15 am"), Ok(ClockTime::new(5, 15)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            ClockTime::parse("banana"),
            Err(ScheduleError::MalformedTime("banana".to_string()))
        );
        assert_eq!(
            ClockTime::parse("10:15"),
            Err(ScheduleError::MalformedTime("10:15".to_string()))
        );
        assert_eq!(
            ClockTime::parse("1015 AM"),
            Err(ScheduleError::MalformedTime("1015 AM".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert_eq!(
            ClockTime::parse("25:10 AM"),
            Err(ScheduleError::HourOutOfRange(25))
        );
        assert_eq!(
            ClockTime::parse("00:10 AM"),
            Err(ScheduleError::HourOutOfRange(0))
        );
        assert_eq!(
            ClockTime::parse("10:99 AM"),
            Err(ScheduleError::MinuteOutOfRange(99))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_meridiem() {
        assert_eq!(
            ClockTime::parse("10:15 XM"),
            Err(ScheduleError::UnknownMeridiem("XM".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_the_dial() {
        assert_eq!(ClockTime::new(5, 15).to_string(), "05:15 AM");
        assert_eq!(ClockTime::new(0, 5).to_string(), "12:05 AM");
        assert_eq!(ClockTime::new(12, 30).to_string(), "12:30 PM");
        assert_eq!(ClockTime::new(19, 45).to_string(), "07:45 PM");
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(ClockTime::new(0, 0).minutes_since_midnight(), 0);
        assert_eq!(ClockTime::new(12, 30).minutes_since_midnight(), 750);
        assert_eq!(ClockTime::new(23, 59).minutes_since_midnight(), 1439);
    }

    #[test]
    fn test_countdown_format() {
        let next = NextPrayer {
            name: "Dhuhr".to_string(),
            minutes_remaining: 150,
        };
        assert_eq!(next.countdown(), "2h 30m");

        let wrap = NextPrayer {
            name: "Fajr".to_string(),
            minutes_remaining: 1440,
        };
        assert_eq!(wrap.countdown(), "24h 0m");
    }

    #[test]
    fn test_next_prayer_skips_unreadable_times() {
        let schedule = vec![entry("Fajr", "not a time"), entry("Dhuhr", "12:30 PM")];
        let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();
        assert_eq!(next.name, "Dhuhr");
        assert_eq!(next.minutes_remaining, 150);
    }

    #[test]
    fn test_next_prayer_empty_when_nothing_survives() {
        assert_eq!(next_prayer(&[], ClockTime::new(10, 0)), None);

        let only_markers = vec![entry("Sunrise", "06:45 AM"), entry("Sunset", "06:15 PM")];
        assert_eq!(next_prayer(&only_markers, ClockTime::new(10, 0)), None);

        let only_bad = vec![entry("Fajr", "???")];
        assert_eq!(next_prayer(&only_bad, ClockTime::new(10, 0)), None);
    }

    #[test]
    fn test_next_prayer_tie_keeps_schedule_order() {
        let schedule = vec![entry("Asr", "03:45 PM"), entry("Dhuhr", "03:45 PM")];
        let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();
        assert_eq!(next.name, "Asr");
    }

    #[test]
    fn test_next_prayer_exact_start_is_not_next() {
        // A prayer beginning this very minute is already underway.
        let schedule = vec![entry("Dhuhr", "12:30 PM"), entry("Asr", "03:45 PM")];
        let next = next_prayer(&schedule, ClockTime::new(12, 30)).unwrap();
        assert_eq!(next.name, "Asr");
        assert_eq!(next.minutes_remaining, 195);
    }
}
