//! Fare and travel-time resolution between two stations.
//!
//! The upstream fare table is one-directional: each station lists estimates
//! to some other stations, but a pair may only be recorded on one side.

use super::error::DomainError;

/// Unit appended to durations found in the forward direction.
pub const DURATION_UNIT: &str = "menit";

/// A fare/duration estimate from the owning station to `destination_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Estimate {
    pub destination_id: String,
    /// Fare amount, without currency.
    pub fare: String,
    /// Travel time magnitude, without unit.
    pub duration: String,
}

/// A station's row in the fare table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FareRecord {
    pub station_id: String,
    pub station_name: String,
    pub estimates: Vec<Estimate>,
}

impl FareRecord {
    /// The first estimate to `destination_id`, if it carries a fare.
    fn estimate_to(&self, destination_id: &str) -> Option<&Estimate> {
        self.estimates
            .iter()
            .find(|e| e.destination_id == destination_id)
            .filter(|e| !e.fare.is_empty())
    }
}

/// Resolved fare between two stations, named by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareQuote {
    pub from: String,
    pub to: String,
    pub fare: String,
    pub duration: String,
}

/// Resolve the fare and duration from `from_id` to `to_id`.
///
/// The `from` station's own estimates are searched first; a hit there gets
/// its duration suffixed with [`DURATION_UNIT`]. Otherwise the `to`
/// station's estimate back to `from` is used and its duration is returned
/// as-is.
///
/// An estimate with an empty fare counts as absent, so the reverse
/// direction is still tried. A station with an empty name counts as not
/// found.
///
/// ```
/// use mrt_server::domain::{Estimate, FareRecord, resolve_fare};
///
/// let table = vec![
///     FareRecord {
///         station_id: "A".into(),
///         station_name: "Alpha".into(),
///         estimates: vec![Estimate {
///             destination_id: "B".into(),
///             fare: "3000".into(),
///             duration: "10".into(),
///         }],
///     },
///     FareRecord {
///         station_id: "B".into(),
///         station_name: "Bravo".into(),
///         estimates: vec![],
///     },
/// ];
///
/// assert_eq!(resolve_fare("A", "B", &table).unwrap().duration, "10 menit");
/// assert_eq!(resolve_fare("B", "A", &table).unwrap().duration, "10");
/// ```
pub fn resolve_fare(
    from_id: &str,
    to_id: &str,
    table: &[FareRecord],
) -> Result<FareQuote, DomainError> {
    let mut from_name: Option<&str> = None;
    let mut to_name: Option<&str> = None;
    let mut quote: Option<(String, String)> = None;

    for record in table {
        if record.station_id == from_id {
            if from_name.is_none() {
                from_name = named(record);
            }
            if quote.is_none() {
                quote = record
                    .estimate_to(to_id)
                    .map(|e| (e.fare.clone(), format!("{} {DURATION_UNIT}", e.duration)));
            }
        }
        if record.station_id == to_id && to_name.is_none() {
            to_name = named(record);
        }
        if from_name.is_some() && to_name.is_some() && quote.is_some() {
            break;
        }
    }

    if quote.is_none() {
        quote = table
            .iter()
            .filter(|r| r.station_id == to_id)
            .find_map(|r| r.estimate_to(from_id))
            .map(|e| (e.fare.clone(), e.duration.clone()));
    }

    let (Some(from), Some(to)) = (from_name, to_name) else {
        let missing = if from_name.is_none() { from_id } else { to_id };
        return Err(DomainError::StationNotFound(missing.to_string()));
    };

    let (fare, duration) = quote.ok_or_else(|| DomainError::FareNotFound {
        from: from_id.to_string(),
        to: to_id.to_string(),
    })?;

    Ok(FareQuote {
        from: from.to_string(),
        to: to.to_string(),
        fare,
        duration,
    })
}

fn named(record: &FareRecord) -> Option<&str> {
    Some(record.station_name.as_str()).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(to: &str, fare: &str, duration: &str) -> Estimate {
        Estimate {
            destination_id: to.into(),
            fare: fare.into(),
            duration: duration.into(),
        }
    }

    fn record(id: &str, name: &str, estimates: Vec<Estimate>) -> FareRecord {
        FareRecord {
            station_id: id.into(),
            station_name: name.into(),
            estimates,
        }
    }

    fn table() -> Vec<FareRecord> {
        vec![
            record("A", "Lebak Bulus Grab", vec![estimate("B", "3000", "10")]),
            record("B", "Fatmawati Indomaret", vec![]),
        ]
    }

    #[test]
    fn forward_lookup_appends_unit() {
        let quote = resolve_fare("A", "B", &table()).unwrap();
        assert_eq!(
            quote,
            FareQuote {
                from: "Lebak Bulus Grab".into(),
                to: "Fatmawati Indomaret".into(),
                fare: "3000".into(),
                duration: "10 menit".into(),
            }
        );
    }

    #[test]
    fn reverse_fallback_has_no_unit() {
        let quote = resolve_fare("B", "A", &table()).unwrap();
        assert_eq!(quote.from, "Fatmawati Indomaret");
        assert_eq!(quote.to, "Lebak Bulus Grab");
        assert_eq!(quote.fare, "3000");
        assert_eq!(quote.duration, "10");
    }

    #[test]
    fn forward_wins_over_reverse() {
        let table = vec![
            record("A", "Alpha", vec![estimate("B", "4000", "12")]),
            record("B", "Bravo", vec![estimate("A", "3000", "10")]),
        ];
        let quote = resolve_fare("A", "B", &table).unwrap();
        assert_eq!(quote.fare, "4000");
        assert_eq!(quote.duration, "12 menit");
    }

    #[test]
    fn to_station_listed_before_from() {
        let table = vec![
            record("B", "Bravo", vec![]),
            record("A", "Alpha", vec![estimate("B", "3000", "10")]),
        ];
        let quote = resolve_fare("A", "B", &table).unwrap();
        assert_eq!(quote.from, "Alpha");
        assert_eq!(quote.to, "Bravo");
        assert_eq!(quote.duration, "10 menit");
    }

    #[test]
    fn unknown_station() {
        assert_eq!(
            resolve_fare("A", "Z", &table()),
            Err(DomainError::StationNotFound("Z".into()))
        );
        assert_eq!(
            resolve_fare("Z", "A", &table()),
            Err(DomainError::StationNotFound("Z".into()))
        );
        assert_eq!(
            resolve_fare("A", "B", &[]),
            Err(DomainError::StationNotFound("A".into()))
        );
    }

    #[test]
    fn no_estimate_either_way() {
        let table = vec![record("A", "Alpha", vec![]), record("B", "Bravo", vec![])];
        assert_eq!(
            resolve_fare("A", "B", &table),
            Err(DomainError::FareNotFound {
                from: "A".into(),
                to: "B".into()
            })
        );
    }

    #[test]
    fn unrelated_estimates_ignored() {
        let table = vec![
            record("A", "Alpha", vec![estimate("C", "5000", "20")]),
            record("B", "Bravo", vec![estimate("C", "4000", "15")]),
            record("C", "Charlie", vec![]),
        ];
        assert!(matches!(
            resolve_fare("A", "B", &table),
            Err(DomainError::FareNotFound { .. })
        ));
    }

    #[test]
    fn empty_forward_fare_falls_back_to_reverse() {
        let table = vec![
            record("A", "Alpha", vec![estimate("B", "", "")]),
            record("B", "Bravo", vec![estimate("A", "3000", "10")]),
        ];
        let quote = resolve_fare("A", "B", &table).unwrap();
        assert_eq!(quote.fare, "3000");
        assert_eq!(quote.duration, "10");
    }

    #[test]
    fn empty_fare_both_ways_is_not_found() {
        let table = vec![
            record("A", "Alpha", vec![estimate("B", "", "10")]),
            record("B", "Bravo", vec![estimate("A", "", "10")]),
        ];
        assert!(matches!(
            resolve_fare("A", "B", &table),
            Err(DomainError::FareNotFound { .. })
        ));
    }

    #[test]
    fn untitled_station_is_not_found() {
        let table = vec![
            record("A", "", vec![estimate("B", "3000", "10")]),
            record("B", "Bravo", vec![]),
        ];
        assert_eq!(
            resolve_fare("A", "B", &table),
            Err(DomainError::StationNotFound("A".into()))
        );
        assert_eq!(
            resolve_fare("B", "A", &table),
            Err(DomainError::StationNotFound("A".into()))
        );
    }
}
