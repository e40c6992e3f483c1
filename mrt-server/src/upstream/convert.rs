//! Conversion from upstream DTOs to domain types.
//!
//! Missing or null strings become empty strings and missing lists become
//! empty lists. Timetable strings are kept raw; they are parsed per request
//! against the current date.

use crate::domain::{Estimate, FacilityItem, FareRecord, RetailItem, ScheduleRecord, Station};

use super::types::{
    EstimatePayload, FacilityPayload, FarePayload, RetailPayload, SchedulePayload, StationPayload,
};

impl From<StationPayload> for Station {
    fn from(p: StationPayload) -> Self {
        Self {
            id: p.nid.unwrap_or_default(),
            name: p.title.unwrap_or_default(),
            banner: p.banner.unwrap_or_default(),
            locality_map: p.peta_lokalitas.unwrap_or_default(),
            connecting_transport: p.antarmodas.unwrap_or_default(),
            retail: p
                .retails
                .unwrap_or_default()
                .into_iter()
                .map(RetailItem::from)
                .collect(),
            facilities: p
                .fasilitas
                .unwrap_or_default()
                .into_iter()
                .map(FacilityItem::from)
                .collect(),
        }
    }
}

impl From<RetailPayload> for RetailItem {
    fn from(p: RetailPayload) -> Self {
        Self {
            id: p.nid.unwrap_or_default(),
            title: p.title.unwrap_or_default(),
            category: p.jenis_retail.unwrap_or_default(),
            cover: p.cover.unwrap_or_default(),
        }
    }
}

impl From<FacilityPayload> for FacilityItem {
    fn from(p: FacilityPayload) -> Self {
        Self {
            id: p.nid.unwrap_or_default(),
            title: p.title.unwrap_or_default(),
            category: p.jenis_fasilitas.unwrap_or_default(),
            cover: p.cover.unwrap_or_default(),
        }
    }
}

impl From<SchedulePayload> for ScheduleRecord {
    fn from(p: SchedulePayload) -> Self {
        Self {
            station_id: p.nid.unwrap_or_default(),
            station_name: p.title.unwrap_or_default(),
            lebak_bulus_weekday: p.jadwal_lb_biasa.unwrap_or_default(),
            lebak_bulus_weekend: p.jadwal_lb_libur.unwrap_or_default(),
            bundaran_hi_weekday: p.jadwal_hi_biasa.unwrap_or_default(),
            bundaran_hi_weekend: p.jadwal_hi_libur.unwrap_or_default(),
        }
    }
}

impl From<FarePayload> for FareRecord {
    fn from(p: FarePayload) -> Self {
        Self {
            station_id: p.nid.unwrap_or_default(),
            station_name: p.title.unwrap_or_default(),
            estimates: p
                .estimasi
                .unwrap_or_default()
                .into_iter()
                .map(Estimate::from)
                .collect(),
        }
    }
}

impl From<EstimatePayload> for Estimate {
    fn from(p: EstimatePayload) -> Self {
        Self {
            destination_id: p.stasiun_nid.unwrap_or_default(),
            fare: p.tarif.unwrap_or_default(),
            duration: p.waktu.unwrap_or_default(),
        }
    }
}

/// Convert a whole payload list.
pub fn convert_all<P, T: From<P>>(payloads: Vec<P>) -> Vec<T> {
    payloads.into_iter().map(T::from).collect()
}
