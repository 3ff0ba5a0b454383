//! Error types for the Mosjid Al Fahad content model

use thiserror::Error;

/// Main error type for schedule operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Time string does not match the "HH:MM AM/PM" shape
    #[error("Malformed clock time {0:?} (expected \"HH:MM AM/PM\")")]
    MalformedTime(String),

    /// Hour component outside the 12-hour dial (1-12)
    #[error("Hour {0} is outside the 12-hour dial")]
    HourOutOfRange(u32),

    /// Minute component outside 0-59
    #[error("Minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),

    /// Meridiem marker was neither AM nor PM
    #[error("Unknown meridiem marker {0:?} (expected AM or PM)")]
    UnknownMeridiem(String),
}

/// Result type alias using ScheduleError
pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::MalformedTime("banana".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed clock time \"banana\" (expected \"HH:MM AM/PM\")"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ScheduleError::HourOutOfRange(25);
        assert_eq!(format!("{}", err), "Hour 25 is outside the 12-hour dial");

        let err = ScheduleError::MinuteOutOfRange(99);
        assert_eq!(format!("{}", err), "Minute 99 is outside 0-59");
    }
}
