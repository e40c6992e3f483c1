//! Station records and lookups.

use super::error::DomainError;

/// A station as published by the upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Banner image URL
    pub banner: String,
    /// Locality map image URL
    pub locality_map: String,
    /// Free-text description of connecting transport modes
    pub connecting_transport: String,
    pub retail: Vec<RetailItem>,
    pub facilities: Vec<FacilityItem>,
}

/// A shop or kiosk inside a station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetailItem {
    pub id: String,
    pub title: String,
    /// Raw category label, not normalized
    pub category: String,
    pub cover: String,
}

/// A public facility inside a station (toilet, prayer room, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityItem {
    pub id: String,
    pub title: String,
    /// Raw category label, not normalized
    pub category: String,
    pub cover: String,
}

/// Find a station by id. First match wins.
pub fn find_station<'a>(stations: &'a [Station], id: &str) -> Result<&'a Station, DomainError> {
    stations
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| DomainError::StationNotFound(id.to_string()))
}

/// Keep stations whose name contains `query`, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_by_name(stations: Vec<Station>, query: &str) -> Vec<Station> {
    if query.is_empty() {
        return stations;
    }

    let query = query.to_lowercase();
    stations
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&query))
        .collect()
}
