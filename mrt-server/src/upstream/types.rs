//! Upstream API response DTOs.
//!
//! These types map directly to the MRT JSON feed. The feed omits or nulls
//! fields freely, so nearly everything is `Option`. The station, schedule
//! and fare shapes are all views over the same station records; a single
//! document can be decoded as any of them.

use serde::Deserialize;

/// A station with its detail-page data.
#[derive(Debug, Clone, Deserialize)]
pub struct StationPayload {
    /// Station id.
    pub nid: Option<String>,

    /// Station display name.
    pub title: Option<String>,

    /// Connecting transport, as "mode\r\nroute, route" blocks.
    pub antarmodas: Option<String>,

    /// Locality map image URL.
    pub peta_lokalitas: Option<String>,

    /// Banner image URL.
    pub banner: Option<String>,

    pub retails: Option<Vec<RetailPayload>>,

    pub fasilitas: Option<Vec<FacilityPayload>>,
}

/// A shop inside a station.
#[derive(Debug, Clone, Deserialize)]
pub struct RetailPayload {
    pub nid: Option<String>,
    pub title: Option<String>,
    pub jenis_retail: Option<String>,
    pub cover: Option<String>,
}

/// A public facility inside a station.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityPayload {
    pub nid: Option<String>,
    pub title: Option<String>,
    pub jenis_fasilitas: Option<String>,
    pub cover: Option<String>,
}

/// A station's timetable strings.
///
/// `biasa` is the weekday timetable, `libur` the weekend/holiday one.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePayload {
    pub nid: Option<String>,
    pub title: Option<String>,

    /// Toward Bundaran HI, weekdays.
    pub jadwal_hi_biasa: Option<String>,

    /// Toward Bundaran HI, weekends.
    pub jadwal_hi_libur: Option<String>,

    /// Toward Lebak Bulus, weekdays.
    pub jadwal_lb_biasa: Option<String>,

    /// Toward Lebak Bulus, weekends.
    pub jadwal_lb_libur: Option<String>,
}

/// A station's row in the fare table.
#[derive(Debug, Clone, Deserialize)]
pub struct FarePayload {
    pub nid: Option<String>,
    pub title: Option<String>,
    pub estimasi: Option<Vec<EstimatePayload>>,
}

/// Fare and travel time to one other station.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatePayload {
    /// Destination station id.
    pub stasiun_nid: Option<String>,

    /// Fare amount, no currency.
    pub tarif: Option<String>,

    /// Travel time in minutes, no unit.
    pub waktu: Option<String>,
}
