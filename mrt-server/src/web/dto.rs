//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{FacilityEntry, FareQuote, TransportLink, UpcomingDeparture};
use crate::stations::{NextDeparture, NextDepartures, StationDetail, StationSchedule, StationSummary};

/// Envelope wrapping every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// HTTP status code, repeated in the body
    pub code: u16,

    /// "success" or the error message
    pub message: String,

    /// Payload; `null` on errors
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A 200 response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// An error response with no payload.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Query for listing stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationListQuery {
    /// Case-insensitive name filter
    #[serde(default)]
    pub name: String,
}

/// Query for a fare lookup.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    /// Origin station id
    pub from: Option<String>,

    /// Destination station id
    pub to: Option<String>,
}

/// Query for next-train lookups.
#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    /// `LB` or `HI`
    pub destination: Option<String>,
}

/// A station in listings.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
}

/// One departure in today's schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    /// Station the train departs from
    pub station_name: String,

    /// Terminus name, e.g. "Bundaran HI"
    pub destination: String,

    /// Departure time, HH:MM
    pub time: String,
}

/// Fare between two stations.
#[derive(Debug, Serialize)]
pub struct FareResult {
    pub from: String,
    pub to: String,
    pub fare: String,
    pub duration: String,
}

/// The next train toward a terminus.
#[derive(Debug, Serialize)]
pub struct NextTrainResult {
    pub station_id: String,
    pub station_name: String,
    pub destination: String,
    pub departure: String,
}

/// A departure in a next-trains list.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    pub departure: String,
}

/// The next few trains toward a terminus.
#[derive(Debug, Serialize)]
pub struct NextTrainsResult {
    pub station_id: String,
    pub station_name: String,
    pub destination: String,
    pub next_trains: Vec<DepartureResult>,
}

/// Station images.
#[derive(Debug, Serialize)]
pub struct StationImages {
    pub banner: String,
    pub locality_map: String,
}

/// A connecting transport mode.
#[derive(Debug, Serialize)]
pub struct TransportResult {
    pub mode: String,
    pub routes: Vec<String>,
}

/// A retail or facility item.
#[derive(Debug, Serialize)]
pub struct FacilityResult {
    pub id: String,
    pub name: String,
    pub cover: String,
    pub category: String,
}

/// Station detail page.
#[derive(Debug, Serialize)]
pub struct StationDetailResult {
    pub id: String,
    pub station_name: String,
    pub images: StationImages,
    pub connecting_transport: Vec<TransportResult>,

    /// Items by category label, labels in sorted order
    pub facilities: BTreeMap<String, Vec<FacilityResult>>,
}

// Conversion implementations

impl From<StationSummary> for StationResult {
    fn from(s: StationSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
        }
    }
}

impl ScheduleEntry {
    /// Create from a departure at `station_name`.
    pub fn from_departure(station_name: &str, d: &UpcomingDeparture) -> Self {
        Self {
            station_name: station_name.to_string(),
            destination: d.destination.display_name().to_string(),
            time: d.time.to_string(),
        }
    }

    /// Flatten a station's schedule into entries.
    pub fn from_schedule(schedule: &StationSchedule) -> Vec<Self> {
        schedule
            .departures
            .iter()
            .map(|d| Self::from_departure(&schedule.station_name, d))
            .collect()
    }
}

impl From<FareQuote> for FareResult {
    fn from(q: FareQuote) -> Self {
        Self {
            from: q.from,
            to: q.to,
            fare: q.fare,
            duration: q.duration,
        }
    }
}

impl From<NextDeparture> for NextTrainResult {
    fn from(n: NextDeparture) -> Self {
        Self {
            station_id: n.station_id,
            station_name: n.station_name,
            destination: n.destination.display_name().to_string(),
            departure: n.departure.to_string(),
        }
    }
}

impl From<NextDepartures> for NextTrainsResult {
    fn from(n: NextDepartures) -> Self {
        Self {
            station_id: n.station_id,
            station_name: n.station_name,
            destination: n.destination.display_name().to_string(),
            next_trains: n
                .departures
                .iter()
                .map(|t| DepartureResult {
                    departure: t.to_string(),
                })
                .collect(),
        }
    }
}

impl From<TransportLink> for TransportResult {
    fn from(t: TransportLink) -> Self {
        Self {
            mode: t.mode,
            routes: t.routes,
        }
    }
}

impl From<FacilityEntry> for FacilityResult {
    fn from(f: FacilityEntry) -> Self {
        Self {
            id: f.id,
            name: f.name,
            cover: f.cover,
            category: f.category,
        }
    }
}

impl From<StationDetail> for StationDetailResult {
    fn from(d: StationDetail) -> Self {
        Self {
            id: d.id,
            station_name: d.name,
            images: StationImages {
                banner: d.banner,
                locality_map: d.locality_map,
            },
            connecting_transport: d
                .connecting_transport
                .into_iter()
                .map(TransportResult::from)
                .collect(),
            facilities: d
                .facilities
                .into_iter()
                .map(|(label, items)| {
                    (label, items.into_iter().map(FacilityResult::from).collect())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartureTime, Destination};
    use chrono::TimeZone;
    use chrono_tz::Asia::Jakarta;
    use std::collections::HashMap;

    fn at(h: u32, m: u32) -> DepartureTime {
        DepartureTime::new(Jakarta.with_ymd_and_hms(2025, 3, 14, h, m, 0).unwrap())
    }

    #[test]
    fn envelope_success() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 200, "message": "success", "data": [1, 2]})
        );
    }

    #[test]
    fn envelope_error_has_null_data() {
        let json = serde_json::to_value(ApiResponse::error(404, "station not found: 9")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 404, "message": "station not found: 9", "data": null})
        );
    }

    #[test]
    fn schedule_entries_use_display_names() {
        let schedule = StationSchedule {
            station_name: "Blok M BCA".into(),
            departures: vec![
                UpcomingDeparture {
                    destination: Destination::LebakBulus,
                    time: at(7, 5),
                },
                UpcomingDeparture {
                    destination: Destination::BundaranHi,
                    time: at(7, 10),
                },
            ],
        };

        let json = serde_json::to_value(ScheduleEntry::from_schedule(&schedule)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"station_name": "Blok M BCA", "destination": "Lebak Bulus", "time": "07:05"},
                {"station_name": "Blok M BCA", "destination": "Bundaran HI", "time": "07:10"}
            ])
        );
    }

    #[test]
    fn next_trains_shape() {
        let result = NextTrainsResult::from(NextDepartures {
            station_id: "7".into(),
            station_name: "Senayan".into(),
            destination: Destination::BundaranHi,
            departures: vec![at(9, 30), at(8, 45)],
        });

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["destination"], "Bundaran HI");
        assert_eq!(
            json["next_trains"],
            serde_json::json!([{"departure": "09:30"}, {"departure": "08:45"}])
        );
    }

    #[test]
    fn detail_facilities_sorted_by_label() {
        let entry = |id: &str, category: &str| FacilityEntry {
            id: id.into(),
            name: format!("item {id}"),
            cover: String::new(),
            category: category.into(),
        };

        let mut facilities = HashMap::new();
        facilities.insert("Lain-lain".to_string(), vec![entry("3", "Lain-lain")]);
        facilities.insert("Atm".to_string(), vec![entry("1", "Atm"), entry("2", "Atm")]);

        let result = StationDetailResult::from(StationDetail {
            id: "1".into(),
            name: "Lebak Bulus Grab".into(),
            banner: "b.jpg".into(),
            locality_map: "m.jpg".into(),
            connecting_transport: vec![TransportLink {
                mode: "KWK".into(),
                routes: vec!["S03".into(), "S05".into()],
            }],
            facilities,
        });

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.find("\"Atm\"").unwrap() < json.find("\"Lain-lain\"").unwrap());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["station_name"], "Lebak Bulus Grab");
        assert_eq!(value["images"]["locality_map"], "m.jpg");
        assert_eq!(value["connecting_transport"][0]["routes"][1], "S05");
        assert_eq!(value["facilities"]["Atm"][1]["id"], "2");
    }
}
