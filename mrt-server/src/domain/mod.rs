//! Domain types and the schedule/fare resolution core.
//!
//! Everything here is a pure function over data already fetched from the
//! upstream feed: no IO, no shared state.

mod error;
mod facility;
mod fare;
mod schedule;
mod station;
mod time;

pub use error::DomainError;
pub use facility::{
    CATCH_ALL_CATEGORY, FacilityEntry, TransportLink, group_facilities, normalize_category,
    parse_connecting_transport,
};
pub use fare::{DURATION_UNIT, Estimate, FareQuote, FareRecord, resolve_fare};
pub use schedule::{
    DayKind, Destination, ScheduleRecord, UpcomingDeparture, find_schedule, next_departure,
    next_departures, parse_schedule, upcoming_today,
};
pub use station::{FacilityItem, RetailItem, Station, filter_by_name, find_station};
pub use time::{DepartureTime, TimeError};
