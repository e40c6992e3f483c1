//! Upstream MRT feed access.
//!
//! The Jakarta MRT site publishes one JSON document of station records.
//! Each record carries the station's detail-page data, its four timetable
//! strings and its fare estimates, so the station, schedule and fare views
//! are all decoded from the same document by default.
//!
//! [`TransitSource`] is the seam the station service depends on. It is
//! implemented by the live [`MrtClient`] and by the offline
//! [`FixtureSource`].

mod client;
mod convert;
mod error;
mod fixture;
mod source;
mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, MrtClient, MrtConfig};
pub use error::UpstreamError;
pub use fixture::FixtureSource;
pub use source::TransitSource;
pub use types::{
    EstimatePayload, FacilityPayload, FarePayload, RetailPayload, SchedulePayload, StationPayload,
};
