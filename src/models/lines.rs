use serde::{Deserialize, Serialize};

use super::id::{IdSequence, LineId};
use super::line::{validate_name, Line};
use super::station::Station;
use crate::error::{Result, SubwayError};

/// Every line registered in the network.
///
/// Owns the rule that no two lines share a name or an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLines")]
pub struct Lines {
    lines: Vec<Line>,
    #[serde(default)]
    ids: IdSequence,
}

#[derive(Deserialize)]
struct RawLines {
    lines: Vec<Line>,
    #[serde(default)]
    ids: IdSequence,
}

impl TryFrom<RawLines> for Lines {
    type Error = SubwayError;

    fn try_from(raw: RawLines) -> Result<Self> {
        let mut lines = Lines::new(raw.lines)?;
        lines.ids.observe(raw.ids.current());
        Ok(lines)
    }
}

impl Lines {
    /// Wrap an existing snapshot. Lines that already carry ids keep them;
    /// lines without one get a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLineName` or `DuplicateLineId` if two lines in the
    /// snapshot collide.
    pub fn new(lines: Vec<Line>) -> Result<Self> {
        let mut ids = IdSequence::default();
        for id in lines.iter().filter_map(Line::id) {
            ids.observe(id.0);
        }
        let mut collection = Self { lines: Vec::with_capacity(lines.len()), ids };
        for line in lines {
            collection.add(line)?;
        }
        Ok(collection)
    }

    /// Fail if a registered line already uses `candidate`'s name
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLineName` on a name collision. Color is ignored.
    pub fn validate_duplicate(&self, candidate: &Line) -> Result<()> {
        self.check_name_free(candidate.name(), None)
    }

    /// Register a new line and give it an id
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLineName` if the name is taken and `DuplicateLineId`
    /// if the line arrives with an id another line already has.
    pub fn add(&mut self, mut line: Line) -> Result<LineId> {
        self.validate_duplicate(&line)?;
        let id = match line.id() {
            Some(id) => {
                if self.lines.iter().any(|existing| existing.id() == Some(id)) {
                    return Err(SubwayError::DuplicateLineId(id));
                }
                self.ids.observe(id.0);
                id
            }
            None => LineId(self.ids.next_value()),
        };
        line.assign_id(id);
        crate::log!("Added line {} as {}", line.name(), id);
        self.lines.push(line);
        Ok(id)
    }

    /// Rename and recolor a line
    ///
    /// # Errors
    ///
    /// Returns `UnknownLine`, `BlankLineName`, or `DuplicateLineName` if
    /// another line already has the new name.
    pub fn update(&mut self, id: LineId, name: impl Into<String>, color: impl Into<String>) -> Result<()> {
        let name = validate_name(name.into())?;
        self.check_name_free(&name, Some(id))?;
        self.get_mut(id)?.rename(name, color.into())
    }

    /// # Errors
    ///
    /// Returns `UnknownLine` if no line has this id.
    pub fn remove(&mut self, id: LineId) -> Result<Line> {
        let index = self
            .lines
            .iter()
            .position(|line| line.id() == Some(id))
            .ok_or(SubwayError::UnknownLine(id))?;
        Ok(self.lines.remove(index))
    }

    /// # Errors
    ///
    /// Returns `UnknownLine` if no line has this id.
    pub fn get(&self, id: LineId) -> Result<&Line> {
        self.lines
            .iter()
            .find(|line| line.id() == Some(id))
            .ok_or(SubwayError::UnknownLine(id))
    }

    fn get_mut(&mut self, id: LineId) -> Result<&mut Line> {
        self.lines
            .iter_mut()
            .find(|line| line.id() == Some(id))
            .ok_or(SubwayError::UnknownLine(id))
    }

    /// # Errors
    ///
    /// Returns `UnknownLine`, or any error from [`Line::insert_section`].
    pub fn insert_section(&mut self, id: LineId, up_station: Station, down_station: Station, distance: u32) -> Result<()> {
        self.get_mut(id)?.insert_section(up_station, down_station, distance)
    }

    /// # Errors
    ///
    /// Returns `UnknownLine`, or any error from [`Line::remove_station`].
    pub fn remove_station(&mut self, id: LineId, station: &Station) -> Result<()> {
        self.get_mut(id)?.remove_station(station)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn check_name_free(&self, name: &str, except: Option<LineId>) -> Result<()> {
        let taken = self
            .lines
            .iter()
            .filter(|line| except.is_none() || line.id() != except)
            .any(|line| line.name() == name);
        if taken {
            return Err(SubwayError::DuplicateLineName(name.to_string()));
        }
        Ok(())
    }
}
