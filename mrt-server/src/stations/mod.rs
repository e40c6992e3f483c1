//! Station queries over the upstream MRT feed.
//!
//! [`StationService`] is the single entry point the web layer calls: list
//! stations, today's schedule, fares, next trains and station details.

mod error;
mod service;

pub use error::ServiceError;
pub use service::{
    NEXT_DEPARTURES_LIMIT, NextDeparture, NextDepartures, StationDetail, StationSchedule,
    StationService, StationSummary,
};
