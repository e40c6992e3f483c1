//! Departure time handling for the MRT schedule feed.
//!
//! The upstream feed lists departures as bare "HH:MM" strings. A
//! [`DepartureTime`] pins such a string to a calendar date in a concrete
//! timezone so it can be compared against "now".

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A departure on a specific day, in a specific timezone.
///
/// Ordering follows the underlying instant, so two departures compare the
/// same way regardless of how they were written in the feed.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::DepartureTime;
/// use chrono::NaiveDate;
/// use chrono_tz::Asia::Jakarta;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let time = DepartureTime::parse_hhmm("06:05", date, Jakarta).unwrap();
/// assert_eq!(time.to_string(), "06:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime(DateTime<Tz>);

impl DepartureTime {
    /// Wrap an existing instant.
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self(instant)
    }

    /// Parse a time from strict "HH:MM" format on the given date.
    ///
    /// Hours must be two digits in 00-23 and minutes two digits in 00-59.
    ///
    /// ```
    /// use mrt_server::domain::DepartureTime;
    /// use chrono::NaiveDate;
    /// use chrono_tz::Asia::Jakarta;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    ///
    /// assert!(DepartureTime::parse_hhmm("00:00", date, Jakarta).is_ok());
    /// assert!(DepartureTime::parse_hhmm("23:59", date, Jakarta).is_ok());
    ///
    /// assert!(DepartureTime::parse_hhmm("6:00", date, Jakarta).is_err());
    /// assert!(DepartureTime::parse_hhmm("25:99", date, Jakarta).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate, tz: Tz) -> Result<Self, TimeError> {
        let time = parse_clock(s)?;

        // Gaps from DST transitions resolve to the earliest valid instant.
        let instant = tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .ok_or_else(|| TimeError::new("time does not exist in timezone"))?;

        Ok(Self(instant))
    }

    /// Parse "HH:MM" on the calendar day of `reference`, in its timezone.
    pub fn on_day_of(s: &str, reference: &DateTime<Tz>) -> Result<Self, TimeError> {
        Self::parse_hhmm(s, reference.date_naive(), reference.timezone())
    }

    /// Returns the underlying instant.
    pub fn instant(&self) -> DateTime<Tz> {
        self.0
    }

    /// Returns the local calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Whether this departure is strictly later than `reference`.
    pub fn is_after(&self, reference: &DateTime<Tz>) -> bool {
        self.0 > *reference
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepartureTime({} {:02}:{:02} {})",
            self.date(),
            self.hour(),
            self.minute(),
            self.0.timezone()
        )
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse the clock part of a strict "HH:MM" string.
fn parse_clock(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Jakarta;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let d = date(2025, 3, 14);

        let t = DepartureTime::parse_hhmm("00:00", d, Jakarta).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = DepartureTime::parse_hhmm("23:59", d, Jakarta).unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));

        let t = DepartureTime::parse_hhmm("05:30", d, Jakarta).unwrap();
        assert_eq!((t.hour(), t.minute()), (5, 30));
        assert_eq!(t.date(), d);
    }

    #[test]
    fn parse_invalid_format() {
        let d = date(2025, 3, 14);

        // Wrong length
        assert!(DepartureTime::parse_hhmm("6:00", d, Jakarta).is_err());
        assert!(DepartureTime::parse_hhmm("06:0", d, Jakarta).is_err());
        assert!(DepartureTime::parse_hhmm("06:00:00", d, Jakarta).is_err());
        assert!(DepartureTime::parse_hhmm("", d, Jakarta).is_err());

        // Wrong separator
        assert!(DepartureTime::parse_hhmm("06.00", d, Jakarta).is_err());

        // Out of range
        assert!(DepartureTime::parse_hhmm("24:00", d, Jakarta).is_err());
        assert!(DepartureTime::parse_hhmm("25:99", d, Jakarta).is_err());
        assert!(DepartureTime::parse_hhmm("12:60", d, Jakarta).is_err());

        // Not digits
        assert!(DepartureTime::parse_hhmm("ab:cd", d, Jakarta).is_err());
    }

    #[test]
    fn anchored_in_timezone() {
        let t = DepartureTime::parse_hhmm("07:00", date(2025, 3, 14), Jakarta).unwrap();
        // Jakarta is UTC+7 all year round.
        assert_eq!(t.instant().naive_utc().to_string(), "2025-03-14 00:00:00");
    }

    #[test]
    fn on_day_of_uses_reference_date() {
        let now = Jakarta.with_ymd_and_hms(2025, 3, 15, 22, 10, 0).unwrap();
        let t = DepartureTime::on_day_of("05:00", &now).unwrap();
        assert_eq!(t.date(), date(2025, 3, 15));
        assert!(!t.is_after(&now));
    }

    #[test]
    fn ordering_and_display() {
        let d = date(2025, 3, 14);
        let early = DepartureTime::parse_hhmm("05:05", d, Jakarta).unwrap();
        let late = DepartureTime::parse_hhmm("17:45", d, Jakarta).unwrap();

        assert!(early < late);
        assert_eq!(early.to_string(), "05:05");
        assert_eq!(late.to_string(), "17:45");
        assert!(format!("{early:?}").contains("2025-03-14 05:05"));
    }
}
