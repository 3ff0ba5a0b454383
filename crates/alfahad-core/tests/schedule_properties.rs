//! Property-based tests for clock parsing and next-prayer selection
//!
//! Uses proptest to verify the parse/display round trip and the
//! day-circle invariants of the scheduler.

use proptest::prelude::*;

use alfahad_core::{next_prayer, ClockTime, PrayerTime, MINUTES_PER_DAY, NON_ROTATING};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate any minute of the day
fn clock_time_strategy() -> impl Strategy<Value = ClockTime> {
    (0u8..24, 0u8..60).prop_map(|(hour, minute)| ClockTime::new(hour, minute))
}

/// Generate a valid "HH:MM AM/PM" display time
fn display_time_strategy() -> impl Strategy<Value = String> {
    (1u32..=12, 0u32..60, prop::bool::ANY).prop_map(|(hour, minute, afternoon)| {
        format!(
            "{:02}:{:02} {}",
            hour,
            minute,
            if afternoon { "PM" } else { "AM" }
        )
    })
}

/// Generate prayer names that take part in rotation
fn rotating_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,12}")
        .expect("valid regex")
        .prop_filter("not a marker name", |name| {
            !NON_ROTATING.contains(&name.as_str())
        })
}

/// Generate a schedule of rotating prayers with valid times
fn schedule_strategy(max_len: usize) -> impl Strategy<Value = Vec<PrayerTime>> {
    prop::collection::vec(
        (rotating_name_strategy(), display_time_strategy())
            .prop_map(|(name, time)| PrayerTime::new(name, time, "")),
        1..max_len,
    )
}

/// Circular minutes from `from` forward to `to`, counting a full day
/// when they coincide
fn forward_distance(from: u32, to: u32) -> u32 {
    let diff = (to + MINUTES_PER_DAY - from) % MINUTES_PER_DAY;
    if diff == 0 {
        MINUTES_PER_DAY
    } else {
        diff
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every clock time survives a display/parse round trip
    #[test]
    fn display_parse_roundtrip(time in clock_time_strategy()) {
        let shown = time.to_string();
        prop_assert_eq!(ClockTime::parse(&shown).unwrap(), time);
    }

    /// Every valid display string parses and renders back unchanged
    #[test]
    fn parse_display_roundtrip(text in display_time_strategy()) {
        let parsed = ClockTime::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
    }

    /// A schedule with at least one rotating prayer always has a winner
    #[test]
    fn rotating_schedule_always_resolves(
        schedule in schedule_strategy(10),
        now in clock_time_strategy(),
    ) {
        prop_assert!(next_prayer(&schedule, now).is_some());
    }

    /// The winner is never a marker entry
    #[test]
    fn winner_is_never_a_marker(
        schedule in schedule_strategy(10),
        now in clock_time_strategy(),
    ) {
        let next = next_prayer(&schedule, now).unwrap();
        prop_assert!(!NON_ROTATING.contains(&next.name.as_str()));
    }

    /// The countdown is always between one minute and a full day
    #[test]
    fn countdown_stays_on_the_day_circle(
        schedule in schedule_strategy(10),
        now in clock_time_strategy(),
    ) {
        let next = next_prayer(&schedule, now).unwrap();
        prop_assert!(next.minutes_remaining >= 1);
        prop_assert!(next.minutes_remaining <= MINUTES_PER_DAY);
    }

    /// Walking the countdown forward from now lands on the winner's minute
    #[test]
    fn countdown_lands_on_the_winner(
        schedule in schedule_strategy(10),
        now in clock_time_strategy(),
    ) {
        let next = next_prayer(&schedule, now).unwrap();
        let landing = (now.minutes_since_midnight() + next.minutes_remaining) % MINUTES_PER_DAY;

        // Generated names may repeat, so match name and minute together
        let winner_exists = schedule.iter().any(|p| {
            p.name == next.name
                && ClockTime::parse(&p.time).unwrap().minutes_since_midnight() == landing
        });
        prop_assert!(winner_exists, "no {} entry at minute {}", next.name, landing);
    }

    /// No schedule entry is circularly closer than the winner
    #[test]
    fn winner_is_the_soonest_candidate(
        schedule in schedule_strategy(10),
        now in clock_time_strategy(),
    ) {
        let next = next_prayer(&schedule, now).unwrap();
        let now_minutes = now.minutes_since_midnight();

        for prayer in &schedule {
            let minutes = ClockTime::parse(&prayer.time)
                .unwrap()
                .minutes_since_midnight();
            prop_assert!(
                forward_distance(now_minutes, minutes) >= next.minutes_remaining,
                "{} at {} beats the winner", prayer.name, prayer.time
            );
        }
    }
}
