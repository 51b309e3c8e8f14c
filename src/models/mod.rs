mod id;
mod line;
mod lines;
mod section;
mod sections;
mod station;
mod station_registry;
mod subway_graph;

pub use id::{IdSequence, LineId, StationId};
pub use line::Line;
pub use lines::Lines;
pub use section::Section;
pub use sections::Sections;
pub use station::{Station, StationName};
pub use station_registry::StationRegistry;
pub use subway_graph::{Edges, Paths, Route, SectionEdge, StationNode, Stations, SubwayGraph};
