//! Schedule parsing and next-departure selection.
//!
//! Each station carries four raw schedule strings: one per direction, split
//! into a weekday and a weekend variant. A raw string is a comma separated
//! list of "HH:MM" tokens, e.g. `"05:00, 05:10,,05:20"`.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

use super::error::DomainError;
use super::time::DepartureTime;

/// One of the two end-of-line directions on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Southern terminus, code `LB`.
    LebakBulus,
    /// Northern terminus, code `HI`.
    BundaranHi,
}

impl Destination {
    /// Parse a destination code. Only the exact codes `LB` and `HI` are accepted.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        match code {
            "LB" => Ok(Self::LebakBulus),
            "HI" => Ok(Self::BundaranHi),
            other => Err(DomainError::InvalidDestination(other.to_string())),
        }
    }

    /// The two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LebakBulus => "LB",
            Self::BundaranHi => "HI",
        }
    }

    /// Human-readable terminus name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LebakBulus => "Lebak Bulus",
            Self::BundaranHi => "Bundaran HI",
        }
    }
}

/// Which timetable variant applies on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    /// Saturday and Sunday run the weekend timetable.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }
}

/// Raw timetable strings for one station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub station_id: String,
    pub station_name: String,
    pub lebak_bulus_weekday: String,
    pub lebak_bulus_weekend: String,
    pub bundaran_hi_weekday: String,
    pub bundaran_hi_weekend: String,
}

impl ScheduleRecord {
    /// Select the raw schedule string for a direction and day kind.
    pub fn variant(&self, destination: Destination, day: DayKind) -> &str {
        match (destination, day) {
            (Destination::LebakBulus, DayKind::Weekday) => &self.lebak_bulus_weekday,
            (Destination::LebakBulus, DayKind::Weekend) => &self.lebak_bulus_weekend,
            (Destination::BundaranHi, DayKind::Weekday) => &self.bundaran_hi_weekday,
            (Destination::BundaranHi, DayKind::Weekend) => &self.bundaran_hi_weekend,
        }
    }

    /// Today's departures toward `destination`, using the variant for the
    /// weekday of `now`.
    pub fn departures_toward(
        &self,
        destination: Destination,
        now: &DateTime<Tz>,
    ) -> Result<Vec<DepartureTime>, DomainError> {
        let day = DayKind::of(now.date_naive());
        parse_schedule(self.variant(destination, day), now)
    }
}

/// A departure tagged with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingDeparture {
    pub destination: Destination,
    pub time: DepartureTime,
}

/// Parse a raw schedule string into departures on the day of `now`.
///
/// Empty and whitespace-only tokens are skipped. The first malformed token
/// fails the whole string; no partial result is returned. Output keeps the
/// token order of the input.
pub fn parse_schedule(raw: &str, now: &DateTime<Tz>) -> Result<Vec<DepartureTime>, DomainError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            DepartureTime::on_day_of(token, now)
                .map_err(|_| DomainError::InvalidTimeFormat(token.to_string()))
        })
        .collect()
}

/// The earliest departure strictly after `now`.
pub fn next_departure(
    times: &[DepartureTime],
    now: &DateTime<Tz>,
) -> Result<DepartureTime, DomainError> {
    times
        .iter()
        .filter(|t| t.is_after(now))
        .min()
        .copied()
        .ok_or(DomainError::NoUpcomingDeparture)
}

/// Up to `limit` departures strictly after `now`.
///
/// Unlike [`next_departure`], results come back in source order rather
/// than sorted by time. `limit` must be at least 1; debug builds panic on
/// zero, release builds return [`DomainError::NoUpcomingDeparture`].
pub fn next_departures(
    times: &[DepartureTime],
    now: &DateTime<Tz>,
    limit: usize,
) -> Result<Vec<DepartureTime>, DomainError> {
    debug_assert!(limit > 0, "next_departures needs a positive limit");

    let upcoming: Vec<DepartureTime> = times
        .iter()
        .filter(|t| t.is_after(now))
        .take(limit)
        .copied()
        .collect();

    if upcoming.is_empty() {
        return Err(DomainError::NoUpcomingDeparture);
    }

    Ok(upcoming)
}

/// Find the schedule record for a station. First match wins.
pub fn find_schedule<'a>(
    records: &'a [ScheduleRecord],
    station_id: &str,
) -> Result<&'a ScheduleRecord, DomainError> {
    records
        .iter()
        .find(|r| r.station_id == station_id)
        .ok_or_else(|| DomainError::StationNotFound(station_id.to_string()))
}

/// Remaining departures today in both directions.
///
/// Lebak Bulus departures come first, then Bundaran HI, each in source
/// order. An empty result is not an error.
///
/// The timetable variant follows the day of `now`: on Saturdays and
/// Sundays the weekend strings are listed, not the weekday ones.
pub fn upcoming_today(
    record: &ScheduleRecord,
    now: &DateTime<Tz>,
) -> Result<Vec<UpcomingDeparture>, DomainError> {
    let mut upcoming = Vec::new();

    for destination in [Destination::LebakBulus, Destination::BundaranHi] {
        let times = record.departures_toward(destination, now)?;
        upcoming.extend(
            times
                .into_iter()
                .filter(|t| t.is_after(now))
                .map(|time| UpcomingDeparture { destination, time }),
        );
    }

    Ok(upcoming)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Jakarta;
    use proptest::prelude::*;

    fn now() -> DateTime<Tz> {
        Jakarta.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn arb_clock() -> impl Strategy<Value = (u32, u32)> {
        (0u32..24, 0u32..60)
    }

    /// A token list with blank entries and padding mixed in.
    fn arb_schedule() -> impl Strategy<Value = (Vec<(u32, u32)>, String)> {
        prop::collection::vec((arb_clock(), 0usize..3, any::<bool>()), 0..20).prop_map(
            |entries| {
                let mut clocks = Vec::new();
                let mut parts = Vec::new();
                for ((h, m), pad, blank_after) in entries {
                    clocks.push((h, m));
                    parts.push(format!("{}{h:02}:{m:02}", " ".repeat(pad)));
                    if blank_after {
                        parts.push("  ".to_string());
                    }
                }
                (clocks, parts.join(","))
            },
        )
    }

    proptest! {
        /// One departure per non-empty token, matching its clock, on today's date
        #[test]
        fn parse_one_per_token((clocks, raw) in arb_schedule()) {
            let now = now();
            let times = parse_schedule(&raw, &now).unwrap();
            prop_assert_eq!(times.len(), clocks.len());
            for (t, (h, m)) in times.iter().zip(clocks) {
                prop_assert_eq!((t.hour(), t.minute()), (h, m));
                prop_assert_eq!(t.date(), now.date_naive());
            }
        }

        /// The single next departure is the minimum of the later ones
        #[test]
        fn next_is_minimum_of_later(clocks in prop::collection::vec(arb_clock(), 0..20)) {
            let now = now();
            let times: Vec<DepartureTime> = clocks
                .iter()
                .map(|(h, m)| DepartureTime::on_day_of(&format!("{h:02}:{m:02}"), &now).unwrap())
                .collect();
            let later: Vec<&DepartureTime> = times.iter().filter(|t| t.is_after(&now)).collect();

            match next_departure(&times, &now) {
                Ok(next) => {
                    prop_assert!(next.is_after(&now));
                    prop_assert!(later.iter().all(|t| next <= **t));
                }
                Err(e) => {
                    prop_assert_eq!(e, DomainError::NoUpcomingDeparture);
                    prop_assert!(later.is_empty());
                }
            }
        }

        /// Bounded results are a prefix of the later departures in source order
        #[test]
        fn next_n_is_prefix_of_later(
            clocks in prop::collection::vec(arb_clock(), 0..20),
            limit in 1usize..5,
        ) {
            let now = now();
            let times: Vec<DepartureTime> = clocks
                .iter()
                .map(|(h, m)| DepartureTime::on_day_of(&format!("{h:02}:{m:02}"), &now).unwrap())
                .collect();
            let later: Vec<DepartureTime> =
                times.iter().filter(|t| t.is_after(&now)).copied().collect();

            match next_departures(&times, &now, limit) {
                Ok(next) => {
                    prop_assert!(next.len() <= limit);
                    prop_assert_eq!(&next[..], &later[..next.len()]);
                    prop_assert_eq!(next.len(), later.len().min(limit));
                }
                Err(_) => prop_assert!(later.is_empty()),
            }
        }
    }
}
