pub mod constants;
pub mod error;
pub mod fare;
pub mod logging;
pub mod models;
pub mod path;

pub use error::{Result, SubwayError};
pub use fare::{calculate_fare, AgeBracket, Discount, FarePolicy};
pub use models::{Line, LineId, Lines, Section, Station, StationId, StationRegistry, SubwayGraph};
pub use path::{PathFinder, PathReport};
