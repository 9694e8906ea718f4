//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats milliseconds since the epoch as a local calendar date.
///
/// Falls back to the raw number when it is out of range.
pub struct EpochMillis(pub i64);

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.0) {
            Ok(ts) => write!(f, "{}", ts.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert_eq!(EpochMillis(i64::MAX).to_string(), i64::MAX.to_string());
    }

    #[test]
    fn test_epoch_millis_is_a_date() {
        let formatted = EpochMillis(1_700_000_000_000).to_string();
        assert_eq!(formatted.len(), "2023-11-14".len());
        assert!(formatted.starts_with("2023-11-1"));
    }
}
