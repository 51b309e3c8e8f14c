use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::section::Section;
use super::station::Station;
use crate::error::{Result, SubwayError};

/// The sections of one line, kept in up -> down order.
///
/// The chain never branches and never loops: section `i`'s down station is
/// section `i + 1`'s up station and no station appears twice. Every mutation
/// builds the new chain on the side and swaps it in only once it is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Section>", into = "Vec<Section>")]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    #[must_use]
    pub fn new(initial: Section) -> Self {
        Self { sections: vec![initial] }
    }

    /// Build from sections that are already in chain order
    ///
    /// # Errors
    ///
    /// Returns `CannotShrinkLine` for an empty list, `DisconnectedSection` if
    /// two neighbours don't meet and `DuplicateSection` naming the section
    /// that brings a station back a second time.
    pub fn from_ordered(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(SubwayError::CannotShrinkLine);
        }
        for pair in sections.windows(2) {
            if pair[0].down_station() != pair[1].up_station() {
                return Err(disconnected(&pair[1]));
            }
        }
        let chain = Self { sections };
        let repeat = {
            let mut seen = HashSet::new();
            chain.stations().into_iter().position(|station| !seen.insert(station))
        };
        // Station k is the down station of section k - 1
        if let Some(repeat) = repeat {
            return Err(duplicate(&chain.sections[repeat - 1]));
        }
        Ok(chain)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; a chain holds at least one section
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Stations in up -> down order
    #[must_use]
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.sections.first() {
            stations.push(first.up_station());
        }
        stations.extend(self.sections.iter().map(Section::down_station));
        stations
    }

    #[must_use]
    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections.iter().any(|section| section.has_station(station))
    }

    #[must_use]
    pub fn up_terminal(&self) -> Option<&Station> {
        self.sections.first().map(Section::up_station)
    }

    #[must_use]
    pub fn down_terminal(&self) -> Option<&Station> {
        self.sections.last().map(Section::down_station)
    }

    /// True when the sections form exactly one simple path
    #[must_use]
    pub fn check_chain(&self) -> bool {
        if self.sections.is_empty() {
            return false;
        }
        let linked = self
            .sections
            .windows(2)
            .all(|pair| pair[0].down_station() == pair[1].up_station());
        let distinct: HashSet<&Station> = self.stations().into_iter().collect();
        linked && distinct.len() == self.sections.len() + 1
    }

    /// Attach a new section at a station already on the chain.
    ///
    /// A section hanging off either terminal extends the chain. A section
    /// sharing its up station (or its down station) with an existing section
    /// splits that section in two, and has to be shorter than it.
    ///
    /// # Errors
    ///
    /// `DuplicateSection` if both stations are already on the chain,
    /// `DisconnectedSection` if neither is, `InvalidSectionDistance` if a
    /// split is not shorter than the section it splits.
    pub fn insert(&mut self, section: Section) -> Result<()> {
        let up_known = self.contains_station(section.up_station());
        let down_known = self.contains_station(section.down_station());

        if up_known && down_known {
            return Err(duplicate(&section));
        }
        if !up_known && !down_known {
            return Err(disconnected(&section));
        }

        let mut next = self.sections.clone();
        if self.up_terminal() == Some(section.down_station()) {
            next.insert(0, section);
        } else if self.down_terminal() == Some(section.up_station()) {
            next.push(section);
        } else if let Some(index) = next.iter().position(|s| s.up_station() == section.up_station()) {
            let existing = &next[index];
            check_split(existing, &section)?;
            let (upper, lower) = existing.split_at(section.down_station(), section.distance())?;
            next.splice(index..=index, [upper, lower]);
        } else if let Some(index) = next.iter().position(|s| s.down_station() == section.down_station()) {
            let existing = &next[index];
            check_split(existing, &section)?;
            let (upper, lower) =
                existing.split_at(section.up_station(), existing.distance() - section.distance())?;
            next.splice(index..=index, [upper, lower]);
        } else {
            return Err(disconnected(&section));
        }

        self.sections = next;
        debug_assert!(self.check_chain(), "section chain broken after insert");
        Ok(())
    }

    /// Take a station off the chain.
    ///
    /// A terminal station drops its only section; an interior station has its
    /// two sections merged into one covering the summed distance.
    ///
    /// # Errors
    ///
    /// `CannotShrinkLine` if only one section is left, `StationNotInLine` if
    /// the station isn't on the chain.
    pub fn remove_station(&mut self, station: &Station) -> Result<()> {
        if self.sections.len() <= 1 {
            return Err(SubwayError::CannotShrinkLine);
        }

        let upper = self.sections.iter().position(|s| s.down_station() == station);
        let lower = self.sections.iter().position(|s| s.up_station() == station);

        let mut next = self.sections.clone();
        match (upper, lower) {
            (Some(upper), Some(lower)) => {
                let merged = next[upper].merge(&next[lower])?;
                next.splice(upper..=lower, [merged]);
            }
            (Some(index), None) | (None, Some(index)) => {
                next.remove(index);
            }
            (None, None) => return Err(SubwayError::StationNotInLine(station.name().to_string())),
        }

        self.sections = next;
        debug_assert!(self.check_chain(), "section chain broken after removal");
        Ok(())
    }
}

fn check_split(existing: &Section, section: &Section) -> Result<()> {
    if section.distance() >= existing.distance() {
        return Err(SubwayError::InvalidSectionDistance {
            existing: existing.distance(),
            requested: section.distance(),
        });
    }
    Ok(())
}

fn duplicate(section: &Section) -> SubwayError {
    SubwayError::DuplicateSection {
        up: section.up_station().name().to_string(),
        down: section.down_station().name().to_string(),
    }
}

fn disconnected(section: &Section) -> SubwayError {
    SubwayError::DisconnectedSection {
        up: section.up_station().name().to_string(),
        down: section.down_station().name().to_string(),
    }
}

impl TryFrom<Vec<Section>> for Sections {
    type Error = SubwayError;

    fn try_from(sections: Vec<Section>) -> Result<Self> {
        Self::from_ordered(sections)
    }
}

impl From<Sections> for Vec<Section> {
    fn from(sections: Sections) -> Self {
        sections.sections
    }
}
