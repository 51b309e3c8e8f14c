/// Identifier types
///
/// Ids are opaque to the domain: a station or line has none until a registry
/// accepts it, and never changes one afterwards. Registries hand them out
/// sequentially starting at 1, the way a database sequence would.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source shared by the registries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Generate the next raw id value
    pub fn next_value(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Last value handed out or observed
    #[must_use]
    pub fn current(&self) -> u64 {
        self.last
    }

    /// Make sure later ids are never handed out below `value`
    pub fn observe(&mut self, value: u64) {
        self.last = self.last.max(value);
    }
}
