//! Next-prayer selection scenarios over the built-in timetable
//!
//! These tests walk the reference day (Fajr 05:15 AM, Dhuhr 12:30 PM,
//! Asr 03:45 PM, Maghrib 06:20 PM, Isha 07:45 PM) and the edge minutes
//! around it: exact prayer starts, the post-Isha wrap to tomorrow, and
//! schedules replaced through the edit flow.

use alfahad_core::{next_prayer, prayer_schedule, ClockTime, PrayerTime, NON_ROTATING};

// ============================================================================
// Reference Day Tests
// ============================================================================

/// Test mid-morning selection lands on Dhuhr
#[test]
fn test_mid_morning_next_is_dhuhr() {
    let schedule = prayer_schedule();
    let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();

    assert_eq!(next.name, "Dhuhr");
    assert_eq!(next.minutes_remaining, 150);
    assert_eq!(next.countdown(), "2h 30m");
}

/// Test just after midnight the whole day is still ahead
#[test]
fn test_midnight_next_is_fajr() {
    let schedule = prayer_schedule();
    let next = next_prayer(&schedule, ClockTime::new(0, 0)).unwrap();

    assert_eq!(next.name, "Fajr");
    assert_eq!(next.minutes_remaining, 315);
    assert_eq!(next.countdown(), "5h 15m");
}

/// Test each window of the day targets the expected prayer
#[test]
fn test_every_window_targets_expected_prayer() {
    let schedule = prayer_schedule();

    let expectations = [
        (ClockTime::new(4, 0), "Fajr"),
        (ClockTime::new(6, 0), "Dhuhr"),
        (ClockTime::new(13, 0), "Asr"),
        (ClockTime::new(16, 30), "Maghrib"),
        (ClockTime::new(18, 30), "Isha"),
        (ClockTime::new(21, 0), "Fajr"),
    ];

    for (now, expected) in expectations {
        let next = next_prayer(&schedule, now).unwrap();
        assert_eq!(next.name, expected, "wrong prayer at {now}");
    }
}

// ============================================================================
// Wrap-Around Tests
// ============================================================================

/// Test evening wrap counts through midnight to Fajr
#[test]
fn test_evening_wraps_to_tomorrow_fajr() {
    let schedule = prayer_schedule();
    let next = next_prayer(&schedule, ClockTime::new(20, 0)).unwrap();

    // 4h to midnight plus 5h 15m to Fajr
    assert_eq!(next.name, "Fajr");
    assert_eq!(next.minutes_remaining, 555);
    assert_eq!(next.countdown(), "9h 15m");
}

/// Test the last minute of the day still resolves
#[test]
fn test_last_minute_of_day() {
    let schedule = prayer_schedule();
    let next = next_prayer(&schedule, ClockTime::new(23, 59)).unwrap();

    assert_eq!(next.name, "Fajr");
    assert_eq!(next.minutes_remaining, 316);
}

// ============================================================================
// Exact Start Tests
// ============================================================================

/// Test a prayer starting this minute is underway, not next
#[test]
fn test_exact_start_minute_moves_on() {
    let schedule = prayer_schedule();

    // 12:30 PM is Dhuhr's own start; the countdown must target Asr
    let next = next_prayer(&schedule, ClockTime::new(12, 30)).unwrap();
    assert_eq!(next.name, "Asr");
    assert_eq!(next.minutes_remaining, 195);

    // One minute earlier Dhuhr is still ahead
    let next = next_prayer(&schedule, ClockTime::new(12, 29)).unwrap();
    assert_eq!(next.name, "Dhuhr");
    assert_eq!(next.minutes_remaining, 1);
}

// ============================================================================
// Non-Rotating Entry Tests
// ============================================================================

/// Test Sunrise is skipped even when it is the soonest entry
#[test]
fn test_sunrise_never_selected() {
    let schedule = prayer_schedule();

    // 06:00 AM sits before Sunrise (06:45 AM) but after Fajr
    let next = next_prayer(&schedule, ClockTime::new(6, 0)).unwrap();
    assert_eq!(next.name, "Dhuhr");
}

/// Test Sunset is skipped in favor of Maghrib five minutes later
#[test]
fn test_sunset_never_selected() {
    let schedule = prayer_schedule();

    let next = next_prayer(&schedule, ClockTime::new(17, 50)).unwrap();
    assert_eq!(next.name, "Maghrib");
    assert_eq!(next.minutes_remaining, 30);
}

/// Test Jummah is skipped even in its own Friday window
#[test]
fn test_jummah_never_selected() {
    let schedule = prayer_schedule();

    // 01:00 PM is a quarter hour before Jummah (01:15 PM)
    let next = next_prayer(&schedule, ClockTime::new(13, 0)).unwrap();
    assert_eq!(next.name, "Asr");
    assert_eq!(next.minutes_remaining, 165);
}

/// Test a full-day sweep only ever lands on rotating prayers
#[test]
fn test_full_day_sweep_stays_in_rotation() {
    let schedule = prayer_schedule();

    for minutes in 0..24 * 60 {
        let now = ClockTime::new((minutes / 60) as u8, (minutes % 60) as u8);
        let next = next_prayer(&schedule, now).unwrap();
        assert!(
            !NON_ROTATING.contains(&next.name.as_str()),
            "{} selected at {now}",
            next.name
        );
    }
}

// ============================================================================
// Edited Schedule Tests
// ============================================================================

/// Test an edited time takes effect on the next selection
#[test]
fn test_edited_time_changes_selection() {
    let mut schedule = prayer_schedule();

    // Before the edit, 08:00 AM targets Dhuhr
    let next = next_prayer(&schedule, ClockTime::new(8, 0)).unwrap();
    assert_eq!(next.name, "Dhuhr");

    // Pull Asr forward to 09:00 AM
    for prayer in &mut schedule {
        if prayer.name == "Asr" {
            prayer.time = "09:00 AM".to_string();
        }
    }

    let next = next_prayer(&schedule, ClockTime::new(8, 0)).unwrap();
    assert_eq!(next.name, "Asr");
    assert_eq!(next.minutes_remaining, 60);
    assert_eq!(next.countdown(), "1h 0m");
}

/// Test editing a scratch copy leaves the source schedule alone
#[test]
fn test_discarded_draft_changes_nothing() {
    let schedule = prayer_schedule();

    // The edit flow works on a clone and throws it away on cancel
    let mut drafts = schedule.clone();
    for prayer in &mut drafts {
        prayer.time = "01:00 AM".to_string();
    }

    let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();
    assert_eq!(next.name, "Dhuhr");
    assert_eq!(next.minutes_remaining, 150);
}

/// Test a botched edit only drops the one entry
#[test]
fn test_unreadable_edit_drops_only_that_entry() {
    let mut schedule = prayer_schedule();
    for prayer in &mut schedule {
        if prayer.name == "Dhuhr" {
            prayer.time = "half past noon".to_string();
        }
    }

    // Dhuhr's window now falls through to Asr
    let next = next_prayer(&schedule, ClockTime::new(10, 0)).unwrap();
    assert_eq!(next.name, "Asr");

    // The other prayers are untouched
    let next = next_prayer(&schedule, ClockTime::new(4, 0)).unwrap();
    assert_eq!(next.name, "Fajr");
}

// ============================================================================
// Degenerate Schedule Tests
// ============================================================================

/// Test an empty schedule yields no next prayer
#[test]
fn test_empty_schedule() {
    assert_eq!(next_prayer(&[], ClockTime::new(10, 0)), None);
}

/// Test a schedule of only markers yields no next prayer
#[test]
fn test_marker_only_schedule() {
    let markers = vec![
        PrayerTime::new("Sunrise", "06:45 AM", ""),
        PrayerTime::new("Sunset", "06:15 PM", ""),
        PrayerTime::new("Jummah", "01:15 PM", ""),
    ];
    assert_eq!(next_prayer(&markers, ClockTime::new(10, 0)), None);
}

/// Test a single rotating prayer is always the answer
#[test]
fn test_single_prayer_schedule() {
    let lone = vec![PrayerTime::new("Fajr", "05:15 AM", "")];

    let before = next_prayer(&lone, ClockTime::new(5, 0)).unwrap();
    assert_eq!(before.minutes_remaining, 15);

    let after = next_prayer(&lone, ClockTime::new(5, 16)).unwrap();
    assert_eq!(after.name, "Fajr");
    assert_eq!(after.minutes_remaining, 1439);

    // Its own start minute wraps a full day
    let exact = next_prayer(&lone, ClockTime::new(5, 15)).unwrap();
    assert_eq!(exact.minutes_remaining, 1440);
    assert_eq!(exact.countdown(), "24h 0m");
}

/// Test countdown shrinks minute by minute up to the boundary
#[test]
fn test_countdown_shrinks_toward_start() {
    let schedule = prayer_schedule();

    let mut previous = next_prayer(&schedule, ClockTime::new(12, 0)).unwrap();
    assert_eq!(previous.minutes_remaining, 30);

    for minute in 1..30 {
        let next = next_prayer(&schedule, ClockTime::new(12, minute)).unwrap();
        assert_eq!(next.name, "Dhuhr");
        assert_eq!(next.minutes_remaining, previous.minutes_remaining - 1);
        previous = next;
    }
}
