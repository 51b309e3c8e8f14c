use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::id::{IdSequence, StationId};
use super::station::Station;
use crate::error::{Result, SubwayError};

/// All registered stations, in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationRegistry {
    stations: IndexMap<StationId, Station>,
    #[serde(default)]
    ids: IdSequence,
}

impl StationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station under a fresh id
    ///
    /// # Errors
    ///
    /// Returns `BlankStationName` for a blank name and `DuplicateStationName`
    /// if a station with that name is already registered.
    pub fn register(&mut self, name: impl Into<String>) -> Result<Station> {
        let mut station = Station::new(name)?;
        if self.stations.values().any(|existing| *existing == station) {
            return Err(SubwayError::DuplicateStationName(station.name().to_string()));
        }

        let id = StationId(self.ids.next_value());
        station.assign_id(id);
        self.stations.insert(id, station.clone());
        crate::log!("Registered station {} as {}", station.name(), id);
        Ok(station)
    }

    /// Resolve a station id
    ///
    /// # Errors
    ///
    /// Returns `UnknownStation` if the id was never registered or was deleted.
    pub fn find(&self, id: StationId) -> Result<&Station> {
        self.stations.get(&id).ok_or(SubwayError::UnknownStation(id))
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|station| station.name() == name)
    }

    /// Remove a station, keeping the order of the others
    ///
    /// # Errors
    ///
    /// Returns `UnknownStation` if the id is not registered.
    pub fn delete(&mut self, id: StationId) -> Result<Station> {
        self.stations.shift_remove(&id).ok_or(SubwayError::UnknownStation(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
