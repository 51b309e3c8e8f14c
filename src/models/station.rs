use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::id::StationId;
use crate::error::{Result, SubwayError};

/// Non-blank station name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// # Errors
    ///
    /// Returns `BlankStationName` if the name is empty or whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubwayError::BlankStationName);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = SubwayError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop on the network.
///
/// Two stations are equal when their names are equal; the id takes no part in
/// `PartialEq` or `Hash`. Stations get compared before they are registered
/// (when the id is still unset), so duplicate detection has to work on names
/// alone. Storage code that cares about identity uses [`Station::same_identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<StationId>,
    name: StationName,
}

impl Station {
    /// Create an unregistered station
    ///
    /// # Errors
    ///
    /// Returns `BlankStationName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: None,
            name: StationName::new(name)?,
        })
    }

    /// Create a station that already carries its id
    ///
    /// # Errors
    ///
    /// Returns `BlankStationName` if the name is blank.
    pub fn with_id(id: StationId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: Some(id),
            name: StationName::new(name)?,
        })
    }

    #[must_use]
    pub fn id(&self) -> Option<StationId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Identity comparison by id. Unregistered stations have no identity and
    /// never match anything, themselves included.
    #[must_use]
    pub fn same_identity(&self, other: &Station) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    pub(crate) fn assign_id(&mut self, id: StationId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}
