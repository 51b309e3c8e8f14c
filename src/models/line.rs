use serde::{Deserialize, Serialize};

use super::id::LineId;
use super::section::Section;
use super::sections::Sections;
use super::station::Station;
use crate::error::{Result, SubwayError};

/// A named, colored chain of sections with a flat fare surcharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<LineId>,
    name: String,
    color: String,
    #[serde(default)]
    surcharge: u32,
    sections: Sections,
}

#[derive(Deserialize)]
struct RawLine {
    #[serde(default)]
    id: Option<LineId>,
    name: String,
    color: String,
    #[serde(default)]
    surcharge: u32,
    sections: Sections,
}

impl TryFrom<RawLine> for Line {
    type Error = SubwayError;

    fn try_from(raw: RawLine) -> Result<Self> {
        Ok(Self {
            id: raw.id,
            name: validate_name(raw.name)?,
            color: raw.color,
            surcharge: raw.surcharge,
            sections: raw.sections,
        })
    }
}

impl Line {
    /// Create a line from its first section
    ///
    /// # Errors
    ///
    /// Returns `BlankLineName` for a blank name, or the section errors for an
    /// invalid first section.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: Station,
        down_station: Station,
        distance: u32,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        let first = Section::new(up_station, down_station, distance)?;
        Ok(Self {
            id: None,
            name,
            color: color.into(),
            surcharge: 0,
            sections: Sections::new(first),
        })
    }

    #[must_use]
    pub fn with_surcharge(mut self, surcharge: u32) -> Self {
        self.surcharge = surcharge;
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<LineId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }

    #[must_use]
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Stations in up -> down order
    #[must_use]
    pub fn stations(&self) -> Vec<&Station> {
        self.sections.stations()
    }

    #[must_use]
    pub fn has_station(&self, station: &Station) -> bool {
        self.sections.contains_station(station)
    }

    /// # Errors
    ///
    /// See [`Sections::insert`].
    pub fn insert_section(&mut self, up_station: Station, down_station: Station, distance: u32) -> Result<()> {
        let section = Section::new(up_station, down_station, distance)?;
        self.sections.insert(section)?;
        crate::log!("{}: now {} sections", self.name, self.sections.len());
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Sections::remove_station`].
    pub fn remove_station(&mut self, station: &Station) -> Result<()> {
        self.sections.remove_station(station)?;
        crate::log!("{}: removed {}, {} sections left", self.name, station, self.sections.len());
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: LineId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    /// Name uniqueness is checked by `Lines` before this runs
    pub(crate) fn rename(&mut self, name: String, color: String) -> Result<()> {
        self.name = validate_name(name)?;
        self.color = color;
        Ok(())
    }
}

pub(crate) fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(SubwayError::BlankLineName);
    }
    Ok(name)
}
