use thiserror::Error;

use crate::models::{LineId, StationId};

pub type Result<T> = std::result::Result<T, SubwayError>;

/// Domain errors raised while editing the network or querying it.
///
/// Every variant stems from invalid input or topology, so none of them is
/// worth retrying.
#[derive(Debug, Error)]
pub enum SubwayError {
    #[error("station name must not be blank")]
    BlankStationName,
    #[error("line name must not be blank")]
    BlankLineName,
    #[error("station '{0}' is already registered")]
    DuplicateStationName(String),
    #[error("section cannot start and end at '{0}'")]
    SameUpDownStation(String),
    #[error("section distance must be positive")]
    NonPositiveDistance,

    #[error("new section ({requested}) must be shorter than the section it splits ({existing})")]
    InvalidSectionDistance { existing: u32, requested: u32 },
    #[error("section {up} -> {down} is already part of the line")]
    DuplicateSection { up: String, down: String },
    #[error("section {up} -> {down} does not touch any station of the line")]
    DisconnectedSection { up: String, down: String },
    #[error("a line cannot have fewer than one section")]
    CannotShrinkLine,
    #[error("station '{0}' is not on this line")]
    StationNotInLine(String),
    #[error("line '{0}' already exists")]
    DuplicateLineName(String),
    #[error("line {0} does not exist")]
    UnknownLine(LineId),
    #[error("line id {0} is already in use")]
    DuplicateLineId(LineId),
    #[error("total distance does not fit in a u32")]
    DistanceOverflow,

    #[error("source and target are the same station")]
    SameSourceTarget,
    #[error("station {0} is not part of the network")]
    UnknownStation(StationId),
    #[error("no route connects station {from} to station {to}")]
    UnreachablePath { from: StationId, to: StationId },

    #[error("invalid fare policy: {0}")]
    InvalidFarePolicy(&'static str),
    #[error("failed to parse fare policy: {0}")]
    FarePolicyParse(#[from] serde_json::Error),
}
