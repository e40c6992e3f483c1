//! Station queries: the operations exposed to the web layer.
//!
//! Each operation fetches a fresh snapshot from the [`TransitSource`] and
//! runs the pure domain functions over it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::{
    DepartureTime, Destination, FacilityEntry, FareQuote, TransportLink, UpcomingDeparture,
    filter_by_name, find_schedule, find_station, group_facilities, next_departure,
    next_departures, parse_connecting_transport, resolve_fare, upcoming_today,
};
use crate::upstream::TransitSource;

use super::error::ServiceError;

/// How many departures the "next trains" query returns at most.
pub const NEXT_DEPARTURES_LIMIT: usize = 3;

/// Station id and name, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
}

/// The rest of today's departures at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSchedule {
    pub station_name: String,
    pub departures: Vec<UpcomingDeparture>,
}

/// The single next departure toward a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    pub station_id: String,
    pub station_name: String,
    pub destination: Destination,
    pub departure: DepartureTime,
}

/// The next few departures toward a destination, in timetable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDepartures {
    pub station_id: String,
    pub station_name: String,
    pub destination: Destination,
    pub departures: Vec<DepartureTime>,
}

/// Everything shown on a station's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDetail {
    pub id: String,
    pub name: String,
    pub banner: String,
    pub locality_map: String,
    pub connecting_transport: Vec<TransportLink>,
    pub facilities: HashMap<String, Vec<FacilityEntry>>,
}

/// Answers station queries against a [`TransitSource`].
#[derive(Debug, Clone)]
pub struct StationService<S> {
    source: S,
    timezone: Tz,
}

impl<S: TransitSource> StationService<S> {
    /// Create a service; "today" is evaluated in `timezone`.
    pub fn new(source: S, timezone: Tz) -> Self {
        Self { source, timezone }
    }

    /// The timezone schedules are anchored in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The current instant in the service timezone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// List stations, optionally keeping only names containing `name`
    /// (case-insensitive). An empty filter lists everything.
    pub async fn list_stations(&self, name: &str) -> Result<Vec<StationSummary>, ServiceError> {
        let stations = self.source.stations().await?;

        Ok(filter_by_name(stations, name)
            .into_iter()
            .map(|s| StationSummary {
                id: s.id,
                name: s.name,
            })
            .collect())
    }

    /// Remaining departures today at `station_id`, both directions.
    pub async fn schedule_today(
        &self,
        station_id: &str,
        now: &DateTime<Tz>,
    ) -> Result<StationSchedule, ServiceError> {
        let schedules = self.source.schedules().await?;
        let record = find_schedule(&schedules, station_id)?;
        let departures = upcoming_today(record, now)?;

        tracing::debug!(
            station_id,
            count = departures.len(),
            "resolved today's schedule"
        );

        Ok(StationSchedule {
            station_name: record.station_name.clone(),
            departures,
        })
    }

    /// Fare and travel time between two stations, either direction.
    pub async fn fare(&self, from_id: &str, to_id: &str) -> Result<FareQuote, ServiceError> {
        let fares = self.source.fares().await?;
        Ok(resolve_fare(from_id, to_id, &fares)?)
    }

    /// The next departure toward `destination` (`"LB"` or `"HI"`).
    pub async fn next_departure(
        &self,
        station_id: &str,
        destination: &str,
        now: &DateTime<Tz>,
    ) -> Result<NextDeparture, ServiceError> {
        let destination = Destination::parse(destination)?;
        let schedules = self.source.schedules().await?;
        let record = find_schedule(&schedules, station_id)?;

        let times = record.departures_toward(destination, now)?;
        let departure = next_departure(&times, now)?;

        Ok(NextDeparture {
            station_id: station_id.to_string(),
            station_name: record.station_name.clone(),
            destination,
            departure,
        })
    }

    /// Up to [`NEXT_DEPARTURES_LIMIT`] next departures toward `destination`.
    pub async fn next_departures(
        &self,
        station_id: &str,
        destination: &str,
        now: &DateTime<Tz>,
    ) -> Result<NextDepartures, ServiceError> {
        let destination = Destination::parse(destination)?;
        let schedules = self.source.schedules().await?;
        let record = find_schedule(&schedules, station_id)?;

        let times = record.departures_toward(destination, now)?;
        let departures = next_departures(&times, now, NEXT_DEPARTURES_LIMIT)?;

        Ok(NextDepartures {
            station_id: station_id.to_string(),
            station_name: record.station_name.clone(),
            destination,
            departures,
        })
    }

    /// Images, connecting transport and grouped facilities of a station.
    pub async fn station_detail(&self, station_id: &str) -> Result<StationDetail, ServiceError> {
        let stations = self.source.stations().await?;
        let station = find_station(&stations, station_id)?;

        Ok(StationDetail {
            id: station.id.clone(),
            name: station.name.clone(),
            banner: station.banner.clone(),
            locality_map: station.locality_map.clone(),
            connecting_transport: parse_connecting_transport(&station.connecting_transport),
            facilities: group_facilities(&station.retail, &station.facilities),
        })
    }
}
