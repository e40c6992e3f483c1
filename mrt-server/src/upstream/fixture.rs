//! Offline source serving a saved snapshot of the feed.
//!
//! Useful for development and tests without reaching the live API.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{FareRecord, ScheduleRecord, Station};

use super::convert::convert_all;
use super::error::UpstreamError;
use super::source::TransitSource;
use super::types::{FarePayload, SchedulePayload, StationPayload};

/// File every fixture directory must contain.
const STATIONS_FILE: &str = "stations.json";
const SCHEDULES_FILE: &str = "schedules.json";
const FARES_FILE: &str = "fares.json";

/// Source that serves fixed records from memory.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    stations: Arc<Vec<Station>>,
    schedules: Arc<Vec<ScheduleRecord>>,
    fares: Arc<Vec<FareRecord>>,
}

impl FixtureSource {
    /// Serve the given records.
    pub fn from_records(
        stations: Vec<Station>,
        schedules: Vec<ScheduleRecord>,
        fares: Vec<FareRecord>,
    ) -> Self {
        Self {
            stations: Arc::new(stations),
            schedules: Arc::new(schedules),
            fares: Arc::new(fares),
        }
    }

    /// Load a snapshot directory.
    ///
    /// Expects `stations.json`. `schedules.json` and `fares.json` are
    /// optional; when absent, those views are decoded from `stations.json`,
    /// just as the live feed serves all three from one document.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, UpstreamError> {
        let dir = dir.as_ref();

        let stations_path = dir.join(STATIONS_FILE);
        let stations_json = read_file(&stations_path)?
            .ok_or_else(|| UpstreamError::Fixture(format!("missing {:?}", stations_path)))?;

        let schedules_json = read_file(&dir.join(SCHEDULES_FILE))?;
        let fares_json = read_file(&dir.join(FARES_FILE))?;

        let stations: Vec<StationPayload> = decode(&stations_json)?;
        let schedules: Vec<SchedulePayload> =
            decode(schedules_json.as_deref().unwrap_or(&stations_json))?;
        let fares: Vec<FarePayload> = decode(fares_json.as_deref().unwrap_or(&stations_json))?;

        tracing::info!(
            dir = %dir.display(),
            stations = stations.len(),
            schedules = schedules.len(),
            fares = fares.len(),
            "loaded fixture snapshot"
        );

        Ok(Self::from_records(
            convert_all(stations),
            convert_all(schedules),
            convert_all(fares),
        ))
    }
}

/// Read a file, treating "not found" as absent.
fn read_file(path: &Path) -> Result<Option<String>, UpstreamError> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(UpstreamError::Fixture(format!(
            "failed to read {:?}: {}",
            path, e
        ))),
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, UpstreamError> {
    serde_json::from_str(json).map_err(|e| UpstreamError::Json {
        message: e.to_string(),
        body: None,
    })
}

impl TransitSource for FixtureSource {
    async fn stations(&self) -> Result<Vec<Station>, UpstreamError> {
        Ok(self.stations.as_ref().clone())
    }

    async fn schedules(&self) -> Result<Vec<ScheduleRecord>, UpstreamError> {
        Ok(self.schedules.as_ref().clone())
    }

    async fn fares(&self) -> Result<Vec<FareRecord>, UpstreamError> {
        Ok(self.fares.as_ref().clone())
    }
}
