//! The seam between the station service and wherever the data comes from.

use std::future::Future;

use crate::domain::{FareRecord, ScheduleRecord, Station};

use super::error::UpstreamError;

/// A provider of fresh station, schedule and fare snapshots.
///
/// Each call returns an independent snapshot; callers never share or
/// mutate the returned data.
pub trait TransitSource: Send + Sync {
    /// All stations, with detail-page data.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, UpstreamError>> + Send;

    /// All stations' raw timetable strings.
    fn schedules(&self) -> impl Future<Output = Result<Vec<ScheduleRecord>, UpstreamError>> + Send;

    /// The directional fare table.
    fn fares(&self) -> impl Future<Output = Result<Vec<FareRecord>, UpstreamError>> + Send;
}
