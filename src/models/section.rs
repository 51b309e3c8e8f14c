use serde::{Deserialize, Serialize};

use super::station::Station;
use crate::error::{Result, SubwayError};

/// One directed, weighted edge of a line between two adjacent stations.
///
/// Sections are immutable: a line that needs a different section replaces
/// the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: u32,
}

#[derive(Deserialize)]
struct RawSection {
    up_station: Station,
    down_station: Station,
    distance: u32,
}

impl TryFrom<RawSection> for Section {
    type Error = SubwayError;

    fn try_from(raw: RawSection) -> Result<Self> {
        Section::new(raw.up_station, raw.down_station, raw.distance)
    }
}

impl Section {
    /// # Errors
    ///
    /// Returns `SameUpDownStation` if both ends are the same station and
    /// `NonPositiveDistance` for a zero distance.
    pub fn new(up_station: Station, down_station: Station, distance: u32) -> Result<Self> {
        if up_station == down_station {
            return Err(SubwayError::SameUpDownStation(up_station.name().to_string()));
        }
        if distance == 0 {
            return Err(SubwayError::NonPositiveDistance);
        }
        Ok(Self { up_station, down_station, distance })
    }

    #[must_use]
    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    #[must_use]
    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[must_use]
    pub fn has_station(&self, station: &Station) -> bool {
        self.up_station == *station || self.down_station == *station
    }

    /// Split this section at `inner`, which must sit `distance_from_up` away
    /// from the up station. Returns the (upper, lower) halves.
    pub(crate) fn split_at(&self, inner: &Station, distance_from_up: u32) -> Result<(Section, Section)> {
        if distance_from_up >= self.distance {
            return Err(SubwayError::InvalidSectionDistance {
                existing: self.distance,
                requested: distance_from_up,
            });
        }
        let upper = Section::new(self.up_station.clone(), inner.clone(), distance_from_up)?;
        let lower = Section::new(inner.clone(), self.down_station.clone(), self.distance - distance_from_up)?;
        Ok((upper, lower))
    }

    /// Join `self` with the section that continues from its down station
    pub(crate) fn merge(&self, lower: &Section) -> Result<Section> {
        let distance = self
            .distance
            .checked_add(lower.distance)
            .ok_or(SubwayError::DistanceOverflow)?;
        Section::new(self.up_station.clone(), lower.down_station.clone(), distance)
    }
}
